// libmsr/src/device/operations/diagnostics.rs
//! Built-in self tests. A test that runs but does not pass is reported as
//! `false`; only transport and framing failures are errors.

use crate::device::Device;
use crate::protocol::Command;
use crate::protocol::catalog::{self, Ack};
use crate::transport::Transport;
use crate::types::{SelfTest, TestOutcome};
use crate::Result;

impl<T: Transport> Device<T> {
    pub fn test_communication(&mut self) -> Result<bool> {
        self.run_self_test(SelfTest::Communication)
            .map(|outcome| outcome.passed)
    }

    pub fn test_ram(&mut self) -> Result<bool> {
        self.run_self_test(SelfTest::Ram).map(|outcome| outcome.passed)
    }

    /// Waits for a card swipe before the device answers.
    pub fn test_sensor(&mut self) -> Result<bool> {
        self.run_self_test(SelfTest::Sensor)
            .map(|outcome| outcome.passed)
    }

    pub fn run_self_test(&mut self, test: SelfTest) -> Result<TestOutcome> {
        let resp = self.execute(&Command::self_test(test))?;
        let passed = match test {
            SelfTest::Communication => catalog::communication_ok(resp.as_bytes()),
            SelfTest::Ram | SelfTest::Sensor => catalog::ack(resp.as_bytes()) == Some(Ack::Ok),
        };
        if self.options().verbose {
            log::debug!("{} test: {}", test, if passed { "pass" } else { "fail" });
        }
        Ok(TestOutcome { test, passed })
    }

    /// Run every self test in order, stopping at the first error.
    pub fn run_all_self_tests(&mut self) -> Result<Vec<TestOutcome>> {
        SelfTest::ALL
            .iter()
            .map(|&test| self.run_self_test(test))
            .collect()
    }
}
