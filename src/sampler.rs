// This file is part of xkcdpwd.
//
// Copyright (c) 2025  The xkcdpwd Developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::dictionary::DictionaryError;
use rand_core::{CryptoRng, RngCore};

/// Draws an index uniformly distributed in `0..bound`.
///
/// Uses rejection sampling on 64-bit draws so that every index is equally
/// likely regardless of `bound`. A zero `bound` is rejected before touching
/// the random source.
pub fn uniform_index<R>(rng: &mut R, bound: usize) -> Result<usize, DictionaryError>
where
    R: CryptoRng + RngCore + ?Sized,
{
    if bound == 0 {
        return Err(DictionaryError::EmptyRange);
    }

    let bound = bound as u64;
    let max_multiple = u64::MAX / bound;
    let rejection_threshold = max_multiple * bound;

    let mut buffer = [0u8; 8];
    loop {
        rng.try_fill_bytes(&mut buffer)?;
        let random_u64 = u64::from_le_bytes(buffer);

        if random_u64 < rejection_threshold {
            return Ok((random_u64 % bound) as usize);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{ConstantRng, FailingRng};
    use super::*;
    use rand_core::OsRng;

    #[test]
    fn test_zero_bound_rejected() {
        let mut rng = ConstantRng(0);
        assert!(matches!(
            uniform_index(&mut rng, 0),
            Err(DictionaryError::EmptyRange)
        ));
    }

    #[test]
    fn test_zero_bytes_map_to_first_index() {
        let mut rng = ConstantRng(0);
        for bound in [1, 2, 9, 2045, 7776] {
            assert_eq!(uniform_index(&mut rng, bound).unwrap(), 0);
        }
    }

    #[test]
    fn test_single_slot_always_zero() {
        let mut rng = OsRng;
        for _ in 0..100 {
            assert_eq!(uniform_index(&mut rng, 1).unwrap(), 0);
        }
    }

    #[test]
    fn test_index_within_bound() {
        let mut rng = OsRng;
        for bound in [2, 3, 9, 100, 2045] {
            for _ in 0..200 {
                let index = uniform_index(&mut rng, bound).unwrap();
                assert!(index < bound, "index {} out of bound {}", index, bound);
            }
        }
    }

    #[test]
    fn test_all_outcomes_reachable() {
        let mut rng = OsRng;
        let mut seen = [false; 9];
        for _ in 0..2000 {
            seen[uniform_index(&mut rng, 9).unwrap()] = true;
        }
        assert!(
            seen.iter().all(|&s| s),
            "not every outcome was drawn: {:?}",
            seen
        );
    }

    #[test]
    fn test_rejected_draws_are_retried() {
        // u64::MAX never falls below the rejection threshold.
        struct Sequence(Vec<u8>);

        impl RngCore for Sequence {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                let byte = self.0.remove(0);
                dest.fill(byte);
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl CryptoRng for Sequence {}

        let mut rng = Sequence(vec![0xFF, 0x00]);
        assert_eq!(uniform_index(&mut rng, 3).unwrap(), 0);
        assert!(rng.0.is_empty());
    }

    #[test]
    fn test_source_failure_surfaces() {
        let mut rng = FailingRng { remaining: 0 };
        assert!(matches!(
            uniform_index(&mut rng, 10),
            Err(DictionaryError::RandomSourceFailure(_))
        ));
    }
}
