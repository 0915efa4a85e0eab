use core::future::Future;

use crate::{Result, SnowflakeGenerator, SnowflakeId, TimeSource, TokioSleep};

/// Extension trait for asynchronously generating Snowflake IDs using the
/// [`tokio`](https://docs.rs/tokio) async runtime.
///
/// This trait provides convenience methods that use [`TokioSleep`] as the sleep
/// provider, allowing you to call async methods without manually specifying the
/// sleep strategy.
pub trait SnowflakeGeneratorAsyncTokioExt<ID, T>
where
    ID: SnowflakeId,
    T: TimeSource,
{
    /// Returns a future that resolves to the next available Snowflake ID using
    /// [`TokioSleep`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying generator fails.
    fn try_next_id_async(&self) -> impl Future<Output = Result<ID>>;
}

impl<G, ID, T> SnowflakeGeneratorAsyncTokioExt<ID, T> for G
where
    G: SnowflakeGenerator<ID, T>,
    ID: SnowflakeId,
    T: TimeSource,
{
    fn try_next_id_async(&self) -> impl Future<Output = Result<ID>> {
        <Self as crate::SnowflakeGeneratorAsyncExt<ID, T>>::try_next_id_async::<TokioSleep>(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use futures::future::try_join_all;

    use super::*;
    use crate::{LockSnowflakeGenerator, SleepProvider, SnowflakeClassicId, SystemClock, TokioYield};

    const IDS_PER_GENERATOR: usize = 4096 * 8; // Enough to hit several Pending cycles
    const NUM_GENERATORS: u64 = 8;

    type Generator = LockSnowflakeGenerator<SnowflakeClassicId, SystemClock>;

    fn generators() -> Vec<Generator> {
        (0..NUM_GENERATORS)
            .map(|machine_id| Generator::new(1, machine_id, SystemClock::default()).unwrap())
            .collect()
    }

    async fn mint_all<S: SleepProvider>(generator: Generator) -> Result<Vec<SnowflakeClassicId>> {
        let mut ids = Vec::with_capacity(IDS_PER_GENERATOR);
        for _ in 0..IDS_PER_GENERATOR {
            ids.push(crate::SnowflakeGeneratorAsyncExt::try_next_id_async::<S>(&generator).await?);
        }
        Ok(ids)
    }

    fn assert_unique(batches: Vec<Result<Vec<SnowflakeClassicId>>>) {
        let all_ids: Vec<_> = batches.into_iter().flat_map(Result::unwrap).collect();

        let expected_total = usize::try_from(NUM_GENERATORS).unwrap() * IDS_PER_GENERATOR;
        assert_eq!(all_ids.len(), expected_total);

        let mut seen = HashSet::with_capacity(all_ids.len());
        for id in &all_ids {
            assert!(seen.insert(id), "Duplicate ID found: {id:?}");
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn can_call_try_next_id_async() {
        let generator = Generator::new(0, 0, SystemClock::default()).unwrap();
        let a = generator.try_next_id_async().await.unwrap();
        let b = SnowflakeGeneratorAsyncTokioExt::try_next_id_async(&generator)
            .await
            .unwrap();
        assert!(a < b);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn generates_many_unique_ids_sleep() {
        let tasks = generators()
            .into_iter()
            .map(|g| tokio::spawn(mint_all::<TokioSleep>(g)));
        assert_unique(try_join_all(tasks).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn generates_many_unique_ids_yield() {
        let tasks = generators()
            .into_iter()
            .map(|g| tokio::spawn(mint_all::<TokioYield>(g)));
        assert_unique(try_join_all(tasks).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn shared_generator_across_tasks_stays_unique() {
        let generator = Generator::new(2, 2, SystemClock::default()).unwrap();
        let tasks = (0..NUM_GENERATORS).map(|_| {
            let generator = generator.clone();
            tokio::spawn(async move {
                let mut ids = Vec::with_capacity(IDS_PER_GENERATOR);
                for _ in 0..IDS_PER_GENERATOR {
                    ids.push(generator.try_next_id_async().await?);
                }
                Ok::<_, crate::Error>(ids)
            })
        });
        assert_unique(try_join_all(tasks).await.unwrap());
    }
}
