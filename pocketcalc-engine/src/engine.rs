//! Calculator logic - accumulator state machine, digit entry, memory slot

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arithmetic operators the calculator knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op { Add, Sub, Mul, Div }

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("display is not a number")]
    InvalidOperand,
    #[error("division by zero")]
    DivideByZero,
    #[error("result out of range")]
    Overflow,
    #[error("not a digit: {0}")]
    InvalidDigit(u8),
}

/// Longest operand that can be typed. Any 18-digit number fits in an i64.
const MAX_OPERAND_DIGITS: usize = 18;

/// Single-accumulator calculator engine.
///
/// Holds the last committed value, the operator waiting for its second
/// operand, and the operand text as typed. Every user input maps to one
/// method; a front end only needs to forward presses and render `display()`.
/// Failed operations leave the state untouched, so the caller decides how to
/// present the error and recovers with `clear_all`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Engine {
    accumulator: i64,
    pending: Option<Op>,
    display: String,
    awaiting_reset: bool,
    memory: i64,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text. Empty until the first digit is typed.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    pub fn memory(&self) -> i64 {
        self.memory
    }

    /// AC: back to the startup state. The memory slot survives (it has MC).
    pub fn clear_all(&mut self) {
        self.accumulator = 0;
        self.pending = None;
        self.display.clear();
        self.awaiting_reset = false;
    }

    /// CE: drop the operand being typed, keeping the pending operation.
    pub fn clear_entry(&mut self) {
        self.display.clear();
        self.awaiting_reset = false;
    }

    /// Remove the last typed digit. A shown result is cleared wholesale
    /// rather than edited digit by digit.
    pub fn backspace(&mut self) {
        if self.awaiting_reset {
            self.display.clear();
            self.awaiting_reset = false;
        } else {
            self.display.pop();
        }
    }

    /// Append a digit to the operand being typed. The first digit after a
    /// result starts a fresh operand.
    pub fn press_digit(&mut self, digit: u8) -> Result<(), CalcError> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit(digit));
        }
        if self.awaiting_reset {
            self.display.clear();
            self.awaiting_reset = false;
        }
        if self.display.len() < MAX_OPERAND_DIGITS {
            self.display.push((b'0' + digit) as char);
        }
        Ok(())
    }

    /// Choose an operator. The first press commits the typed operand as the
    /// accumulator; a press with an operation already pending folds that
    /// operation first, so `7 - 2 *` leaves 5 waiting to be multiplied.
    pub fn press_operator(&mut self, op: Op) -> Result<(), CalcError> {
        if self.pending.is_none() {
            self.accumulator = self.operand()?;
        } else {
            self.compute()?;
        }
        self.pending = Some(op);
        self.awaiting_reset = true;
        Ok(())
    }

    /// Fold the pending operation and show the result.
    pub fn press_equals(&mut self) -> Result<i64, CalcError> {
        let result = self.compute()?;
        self.pending = None;
        self.awaiting_reset = true;
        Ok(result)
    }

    /// Apply the pending operator between the accumulator and the displayed
    /// operand. With nothing pending the accumulator passes through. The
    /// result becomes both the new accumulator and the display text.
    pub fn compute(&mut self) -> Result<i64, CalcError> {
        let value = self.operand()?;
        let result = match self.pending {
            None => self.accumulator,
            Some(op) => apply(op, self.accumulator, value)?,
        };
        self.display = result.to_string();
        self.accumulator = result;
        Ok(result)
    }

    // Memory slot: independent of the accumulator.

    pub fn memory_clear(&mut self) {
        self.memory = 0;
    }

    /// MR: put the memory value on the display, ready to be used as an
    /// operand or overwritten by the next digit.
    pub fn memory_recall(&mut self) {
        self.display = self.memory.to_string();
        self.awaiting_reset = true;
    }

    pub fn memory_add(&mut self) -> Result<(), CalcError> {
        let value = self.operand()?;
        self.memory = self.memory.checked_add(value).ok_or(CalcError::Overflow)?;
        Ok(())
    }

    pub fn memory_subtract(&mut self) -> Result<(), CalcError> {
        let value = self.operand()?;
        self.memory = self.memory.checked_sub(value).ok_or(CalcError::Overflow)?;
        Ok(())
    }

    fn operand(&self) -> Result<i64, CalcError> {
        self.display.parse().map_err(|_| CalcError::InvalidOperand)
    }
}

fn apply(op: Op, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
    match op {
        Op::Add => lhs.checked_add(rhs).ok_or(CalcError::Overflow),
        Op::Sub => lhs.checked_sub(rhs).ok_or(CalcError::Overflow),
        Op::Mul => lhs.checked_mul(rhs).ok_or(CalcError::Overflow),
        Op::Div => {
            if rhs == 0 {
                return Err(CalcError::DivideByZero);
            }
            // checked_div also covers i64::MIN / -1
            lhs.checked_div(rhs).ok_or(CalcError::Overflow)
        }
    }
}
