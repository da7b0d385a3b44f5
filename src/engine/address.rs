use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::DEPLOY;
use crate::models::deployment::ContractAddress;

/// Where a finished deployment gets its contract address from.
///
/// The simulator only knows this trait, so a real transaction submitter can
/// replace the random source without touching the state machine.
pub trait AddressSource {
    fn next_address(&mut self) -> ContractAddress;
}

/// Uniform, non-cryptographic hex addresses.
#[derive(Debug, Clone)]
pub struct RandomAddressSource {
    rng: SmallRng,
}

impl RandomAddressSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Reproducible sequence, handy for demos and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAddressSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl AddressSource for RandomAddressSource {
    fn next_address(&mut self) -> ContractAddress {
        let alphabet = DEPLOY.address.alphabet;
        let body: String = (0..DEPLOY.address.hex_len)
            .map(|_| alphabet[self.rng.random_range(0..alphabet.len())] as char)
            .collect();
        ContractAddress::from_hex_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_addresses_are_well_formed() {
        let mut source = RandomAddressSource::from_entropy();
        for _ in 0..200 {
            let addr = source.next_address();
            assert_eq!(addr.as_str().len(), 42);
            assert!(ContractAddress::parse(addr.as_str()).is_ok(), "{}", addr);
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RandomAddressSource::seeded(7);
        let mut b = RandomAddressSource::seeded(7);
        assert_eq!(a.next_address(), b.next_address());
        assert_eq!(a.next_address(), b.next_address());
    }

    #[test]
    fn every_hex_digit_shows_up() {
        let mut source = RandomAddressSource::seeded(42);
        let seen: HashSet<char> = (0..50)
            .flat_map(|_| source.next_address().as_str()[2..].chars().collect::<Vec<_>>())
            .collect();
        assert_eq!(seen.len(), 16);
    }
}
