//! Differential replay of operation scripts.
//!
//! Every [`Op`] is applied to a `SimpleVector<u32>` and to a reference
//! `Vec<u32>`. After each step the contents must match, and the vector's
//! capacity must match the capacity predicted by the growth law:
//!
//! - appending to a full vector doubles the capacity (0 becomes 1),
//! - `resize(n)` past capacity grows to `max(n, 2 * capacity)`,
//! - `reserve(n)` past capacity grows to exactly `n`,
//! - nothing else changes the capacity.

use anyhow::{Context, ensure};
use simplevec::SimpleVector;

use crate::data_gen::Op;

/// Capacity predicted for a vector by the growth law.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CapacityModel {
    capacity: usize,
}

impl CapacityModel {
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Accounts for one element appended to a vector of `len` elements.
    pub fn grow_by_one(&mut self, len: usize) {
        if len == self.capacity {
            self.capacity = if self.capacity == 0 {
                1
            } else {
                self.capacity * 2
            };
        }
    }

    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity {
            self.capacity = new_len.max(self.capacity * 2);
        }
    }

    pub fn reserve(&mut self, new_capacity: usize) {
        self.capacity = self.capacity.max(new_capacity);
    }
}

/// Replays `ops` against both containers, failing at the first divergence.
pub fn replay(ops: &[Op]) -> anyhow::Result<SimpleVector<u32>> {
    let mut actual = SimpleVector::new();
    let mut expected = Vec::new();
    let mut capacity = CapacityModel::default();

    for (step, op) in ops.iter().enumerate() {
        apply(op, &mut actual, &mut expected, &mut capacity)
            .and_then(|()| check(&actual, &expected, &capacity))
            .with_context(|| format!("step {step}: {op:?}"))?;
    }
    Ok(actual)
}

fn apply(
    op: &Op,
    actual: &mut SimpleVector<u32>,
    expected: &mut Vec<u32>,
    capacity: &mut CapacityModel,
) -> anyhow::Result<()> {
    match *op {
        Op::PushBack(value) => {
            capacity.grow_by_one(expected.len());
            actual.push_back(value);
            expected.push(value);
        }
        Op::PopBack => {
            if !expected.is_empty() {
                actual.pop_back();
                expected.pop();
            }
        }
        Op::Insert { position, value } => {
            let position = position % (expected.len() + 1);
            capacity.grow_by_one(expected.len());
            let returned = actual.insert(position, value);
            expected.insert(position, value);
            ensure!(
                returned == position,
                "insert returned {returned}, expected {position}"
            );
        }
        Op::Erase { position } => {
            if !expected.is_empty() {
                let position = position % expected.len();
                let returned = actual.erase(position);
                expected.remove(position);
                ensure!(
                    returned == position,
                    "erase returned {returned}, expected {position}"
                );
            }
        }
        Op::Resize(len) => {
            capacity.resize(len);
            actual.resize(len);
            expected.resize(len, u32::default());
        }
        Op::Reserve(new_capacity) => {
            capacity.reserve(new_capacity);
            actual.reserve(new_capacity);
        }
        Op::Clear => {
            actual.clear();
            expected.clear();
        }
        Op::Set { position, value } => {
            if !expected.is_empty() {
                let position = position % expected.len();
                actual[position] = value;
                expected[position] = value;
            }
        }
        Op::CloneAndCompare => {
            let mut copy = actual.clone();
            ensure!(copy == *actual, "clone differs from its source");
            copy.push_back(u32::MAX);
            if let Some(first) = copy.first_mut() {
                *first = first.wrapping_add(1);
            }
            ensure!(
                actual.as_slice() == expected.as_slice(),
                "mutating a clone changed its source"
            );
        }
        Op::At(index) => {
            let got = actual.at(index).ok().copied();
            let want = expected.get(index).copied();
            ensure!(got == want, "at({index}) returned {got:?}, expected {want:?}");
        }
    }
    Ok(())
}

fn check(
    actual: &SimpleVector<u32>,
    expected: &[u32],
    capacity: &CapacityModel,
) -> anyhow::Result<()> {
    ensure!(
        actual.as_slice() == expected,
        "contents {:?} differ from reference {:?}",
        actual,
        expected
    );
    ensure!(
        actual.len() <= actual.capacity(),
        "size {} exceeds capacity {}",
        actual.len(),
        actual.capacity()
    );
    ensure!(
        actual.capacity() == capacity.capacity(),
        "capacity {} differs from predicted {}",
        actual.capacity(),
        capacity.capacity()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_model_doubling() {
        let mut model = CapacityModel::default();
        let mut seen = Vec::new();
        for len in 0..9 {
            model.grow_by_one(len);
            seen.push(model.capacity());
        }
        assert_eq!(seen, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn test_capacity_model_resize_and_reserve() {
        let mut model = CapacityModel::default();
        model.resize(3);
        assert_eq!(model.capacity(), 3);
        model.resize(4);
        assert_eq!(model.capacity(), 6);
        model.reserve(5);
        assert_eq!(model.capacity(), 6);
        model.reserve(20);
        assert_eq!(model.capacity(), 20);
    }

    #[test]
    fn test_replay_small_script() {
        let ops = [
            Op::PushBack(1),
            Op::PushBack(3),
            Op::Insert {
                position: 1,
                value: 2,
            },
            Op::At(2),
            Op::Erase { position: 0 },
            Op::CloneAndCompare,
        ];
        let v = replay(&ops).unwrap();
        assert_eq!(v, [2, 3]);
        assert_eq!(v.capacity(), 4);
    }
}
