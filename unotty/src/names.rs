use rand::{seq::SliceRandom, Rng};

pub const CPU_NAMES: &[&str] = &[
    "Duplex",
    "Watson",
    "Cleverbot",
    "Deep blue",
    "Cortana",
    "Siri",
    "Hal 9000",
];

/// Picks `count` distinct names for the automated players.
pub fn pick_cpu_names<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    CPU_NAMES
        .choose_multiple(rng, count)
        .map(|name| name.to_string())
        .collect()
}
