//! Shared test fixtures
//!
//! `MockBus` is an in-memory KT0913 register file that records every
//! successful transfer and can be told to fail specific accesses.
//! Clones share the same state, so a test can keep a handle for
//! inspection while the driver owns another.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use kt0913_radio::config::{TunerConfig, KT0913_CHIP_ID};
use kt0913_radio::drivers::kt0913::regs::{reg, Registers, LAYOUT};
use kt0913_radio::drivers::kt0913::Kt0913;
use kt0913_radio::hal::i2c::RegisterTransport;

/// One recorded transfer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Read(u8),
    Write(u8, u16),
}

/// Injected bus failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug)]
struct BusState {
    regs: [u16; 256],
    ops: Vec<Op>,
    fail_reads: Vec<u8>,
    fail_writes: Vec<u8>,
    write_budget: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct MockBus {
    state: Arc<Mutex<BusState>>,
}

impl MockBus {
    /// Bus with a KT0913 answering at CHIP_ID
    pub fn new() -> Self {
        Self::with_chip_id(KT0913_CHIP_ID)
    }

    pub fn with_chip_id(id: u16) -> Self {
        let mut regs = [0u16; 256];
        regs[usize::from(reg::CHIP_ID)] = id;
        Self {
            state: Arc::new(Mutex::new(BusState {
                regs,
                ops: Vec::new(),
                fail_reads: Vec::new(),
                fail_writes: Vec::new(),
                write_budget: None,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, BusState> {
        self.state.lock().unwrap()
    }

    /// Set a register as the hardware would
    pub fn set(&self, reg: u8, value: u16) {
        self.state().regs[usize::from(reg)] = value;
    }

    /// Current hardware value of a register
    pub fn get(&self, reg: u8) -> u16 {
        self.state().regs[usize::from(reg)]
    }

    pub fn ops(&self) -> Vec<Op> {
        self.state().ops.clone()
    }

    pub fn writes(&self) -> Vec<(u8, u16)> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Write(reg, value) => Some((reg, value)),
                Op::Read(_) => None,
            })
            .collect()
    }

    pub fn reads(&self) -> Vec<u8> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Read(reg) => Some(reg),
                Op::Write(..) => None,
            })
            .collect()
    }

    pub fn clear_ops(&self) {
        self.state().ops.clear();
    }

    pub fn fail_reads_of(&self, reg: u8) {
        self.state().fail_reads.push(reg);
    }

    pub fn fail_writes_to(&self, reg: u8) {
        self.state().fail_writes.push(reg);
    }

    /// Let `n` more writes succeed, then fail every write
    pub fn fail_after_writes(&self, n: usize) {
        self.state().write_budget = Some(n);
    }

    /// Remove every injected failure
    pub fn heal(&self) {
        let mut state = self.state();
        state.fail_reads.clear();
        state.fail_writes.clear();
        state.write_budget = None;
    }
}

impl RegisterTransport for MockBus {
    type Error = MockError;

    fn read_word(&mut self, reg: u8) -> Result<u16, MockError> {
        let mut state = self.state();
        if state.fail_reads.contains(&reg) {
            return Err(MockError);
        }
        state.ops.push(Op::Read(reg));
        Ok(state.regs[usize::from(reg)])
    }

    fn write_word(&mut self, reg: u8, value: u16) -> Result<(), MockError> {
        let mut state = self.state();
        if state.fail_writes.contains(&reg) {
            return Err(MockError);
        }
        let budget = state.write_budget;
        match budget {
            Some(0) => return Err(MockError),
            Some(n) => state.write_budget = Some(n - 1),
            None => {}
        }
        state.ops.push(Op::Write(reg, value));
        state.regs[usize::from(reg)] = value;
        Ok(())
    }
}

/// Empty register cache over a fresh bus
pub fn registers() -> (Registers<MockBus>, MockBus) {
    let bus = MockBus::new();
    (Registers::new(bus.clone(), &LAYOUT), bus)
}

/// Attached device with the bring-up traffic cleared from the log
pub fn attach(config: TunerConfig) -> (Kt0913<MockBus>, MockBus) {
    let bus = MockBus::new();
    let radio = Kt0913::init(bus.clone(), config).expect("init");
    bus.clear_ops();
    (radio, bus)
}
