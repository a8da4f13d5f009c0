//! Random operation scripts for exercising `SimpleVector`.

/// A single mutation or query applied to a vector under test.
///
/// Positions are stored as raw random numbers and reduced modulo the current
/// size at replay time, so every script is valid regardless of the sizes it
/// passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    PushBack(u32),
    PopBack,
    Insert { position: usize, value: u32 },
    Erase { position: usize },
    Resize(usize),
    Reserve(usize),
    Clear,
    Set { position: usize, value: u32 },
    CloneAndCompare,
    At(usize),
}

/// Controls the shape of generated scripts.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    /// Number of operations per script.
    pub len: usize,
    /// Upper bound (exclusive) for `Resize` and `Reserve` targets.
    pub max_size: usize,
    /// Relative weight of `PushBack` and `Insert` compared to other operations.
    pub growth_weight: u32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        ScriptConfig {
            len: 500,
            max_size: 64,
            growth_weight: 4,
        }
    }
}

/// Generates a reproducible operation script from `seed`.
pub fn generate_ops(seed: u64, config: &ScriptConfig) -> Vec<Op> {
    assert_ne!(config.max_size, 0);
    let mut rng = fastrand::Rng::with_seed(seed);
    let total = 8 + 2 * config.growth_weight;
    (0..config.len)
        .map(|_| {
            let pick = rng.u32(0..total);
            if pick < config.growth_weight {
                Op::PushBack(rng.u32(..))
            } else if pick < 2 * config.growth_weight {
                Op::Insert {
                    position: rng.usize(..),
                    value: rng.u32(..),
                }
            } else {
                match pick - 2 * config.growth_weight {
                    0 => Op::PopBack,
                    1 => Op::Erase {
                        position: rng.usize(..),
                    },
                    2 => Op::Resize(rng.usize(0..config.max_size)),
                    3 => Op::Reserve(rng.usize(0..config.max_size)),
                    4 => Op::Clear,
                    5 => Op::Set {
                        position: rng.usize(..),
                        value: rng.u32(..),
                    },
                    6 => Op::CloneAndCompare,
                    _ => Op::At(rng.usize(0..config.max_size)),
                }
            }
        })
        .collect()
}
