use core::time::Duration;
use std::vec::Vec;

use crate::*;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// In-memory register file standing in for the chip.
///
pub struct FakeBus
{
    pub registers: [u8; 128],

    /// Every write in the order it happened.
    pub writes: Vec<(u8, u8)>,

    /// Every register read in the order it happened.
    pub reads: Vec<u8>,

    /// Registers that ignore writes and always read back the given value.
    pub stuck: Vec<(u8, u8)>,

    /// Zero based index of the transaction that fails.
    pub fail_at: Option<usize>,

    transactions: usize,
}

impl FakeBus
{
    pub fn new() -> Self {
        FakeBus {
            registers: [0u8; 128],
            writes: Vec::new(),
            reads: Vec::new(),
            stuck: Vec::new(),
            fail_at: None,
            transactions: 0,
        }
    }

    /// Bus holding the given sample in the accelerometer output registers.
    ///
    pub fn at_rest(sample: RawVector) -> Self {
        let mut bus = FakeBus::new();
        bus.set_accel(sample);
        bus
    }

    pub fn set_accel(&mut self, sample: RawVector) {
        for (axis, value) in Axis::ALL.into_iter().zip([sample.x, sample.y, sample.z]) {
            let (low, high) = axis.registers();
            let [l, h] = value.to_le_bytes();
            self.registers[low as usize] = l;
            self.registers[high as usize] = h;
        }
    }

    pub fn transactions(&self) -> usize {
        self.transactions
    }

    fn next_transaction(&mut self) -> Result<(), BusFault> {
        let index = self.transactions;
        self.transactions += 1;
        if self.fail_at == Some(index) {
            return Err(BusFault);
        }
        Ok(())
    }
}

impl RegisterBus for FakeBus
{
    type Error = BusFault;

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        self.next_transaction()?;
        self.reads.push(register);
        if let Some((_, value)) = self.stuck.iter().find(|(r, _)| *r == register) {
            return Ok(*value);
        }
        Ok(self.registers[(register & 0x7F) as usize])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.next_transaction()?;
        self.writes.push((register, value));
        self.registers[(register & 0x7F) as usize] = value;
        Ok(())
    }
}

/// Clock that only moves when asked to, every `now()` call advances it by `tick` to mimic the
/// time spent on bus I/O.
///
pub struct FakeTimer
{
    pub time: Duration,
    pub tick: Duration,

    /// `(slot, reference)` of every wait.
    pub waits: Vec<(Duration, Duration)>,
}

impl FakeTimer
{
    pub fn new() -> Self {
        FakeTimer {
            time: Duration::ZERO,
            tick: Duration::from_micros(300),
            waits: Vec::new(),
        }
    }
}

impl SlotTimer for FakeTimer
{
    fn now(&mut self) -> Duration {
        let now = self.time;
        self.time += self.tick;
        now
    }

    fn wait_for_slot(&mut self, slot: Duration, reference: Duration) {
        self.waits.push((slot, reference));
        self.time = next_slot_boundary(slot, reference, self.time);
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Session that already went through `configure()`.
///
pub fn configured(bus: FakeBus, config: Mpu6050Config) -> Mpu6050<FakeBus> {
    init_logger();
    let mut mpu = Mpu6050::new(bus, config);
    mpu.configure().unwrap();
    mpu
}
