use composite_hash::{DeriveConfig, DigestKind, IndexDeriver, IndexError};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const N_KEYS: usize = 1_000_000;
const GEN_SEED: u64 = 42;

fn main() -> Result<(), IndexError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("--- composite_hash throughput ---");
    println!("n = {N_KEYS}");

    let t0 = Instant::now();
    let keys = gen_keys(N_KEYS, GEN_SEED);
    let gen_s = t0.elapsed().as_secs_f64();
    println!(
        "gen:    {:>8.3} s   ({:.1} M keys/s)",
        gen_s,
        N_KEYS as f64 / gen_s / 1e6
    );

    // Roughly a 1% filter for 1M entries.
    let base = DeriveConfig {
        k: 6,
        m: 9_585_058,
        ..Default::default()
    };
    for digest in [
        DigestKind::Fnv1a,
        DigestKind::Fnv1,
        DigestKind::Xxh3 { seed: 0 },
        DigestKind::WyHash { seed: 0 },
    ] {
        let deriver = IndexDeriver::from_config(DeriveConfig { digest, ..base })?;

        // Reuse one buffer; xor into acc so the loop is not optimized away.
        let t1 = Instant::now();
        let mut acc: u32 = 0;
        let mut buf = Vec::with_capacity(base.k as usize);
        for k in &keys {
            deriver.indices_into(k, &mut buf);
            acc ^= buf.iter().fold(0, |a, &i| a ^ i);
        }
        let serial_s = t1.elapsed().as_secs_f64();

        let t2 = Instant::now();
        let batch = deriver.indices_batch(keys.iter().map(|v| v.as_slice()));
        let batch_s = t2.elapsed().as_secs_f64();

        println!(
            "{:<28} serial {:>7.3} s ({:.1} M/s)   batch {:>7.3} s ({:.1} M/s)   (acc={acc}, n={})",
            format!("{digest:?}"),
            serial_s,
            N_KEYS as f64 / serial_s / 1e6,
            batch_s,
            N_KEYS as f64 / batch_s / 1e6,
            batch.len()
        );
    }

    Ok(())
}

/// N random 16-byte keys, deterministic per seed.
fn gen_keys(n: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys = Vec::with_capacity(n);
    for _ in 0..n {
        let mut buf = [0u8; 16];
        rng.fill_bytes(&mut buf);
        keys.push(buf.to_vec());
    }
    keys
}
