use lexaid_model::{ReplyPool, ReplySelector};

/// Picks replies uniformly at random using OS entropy.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSelector;

impl RandomSelector {
    /// Returns a uniformly distributed index in `0..n`.
    fn uniform(n: usize) -> Result<usize, getrandom::Error> {
        let n = n as u64;
        // Largest multiple of `n` that fits, so every residue is equally
        // likely.
        let zone = n * (u64::MAX / n);
        loop {
            let x = getrandom::u64()?;
            if x < zone {
                return Ok((x % n) as usize);
            }
        }
    }
}

impl ReplySelector for RandomSelector {
    fn select(&self, pool: &ReplyPool) -> usize {
        match Self::uniform(pool.len()) {
            Ok(index) => index,
            Err(err) => {
                warn!("no entropy available, using the first reply: {err}");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stays_in_range() {
        let pool = ReplyPool::canned();
        for _ in 0..200 {
            assert!(RandomSelector.select(&pool) < pool.len());
        }
    }

    #[test]
    fn test_single_reply_pool() {
        let pool = ReplyPool::new(["only"]).unwrap();
        assert_eq!(pool.pick(&RandomSelector), "only");
    }

    #[test]
    fn test_covers_the_pool() {
        let pool = ReplyPool::canned();
        let mut seen = vec![false; pool.len()];
        for _ in 0..1000 {
            seen[RandomSelector.select(&pool)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
