use afl::fuzz;
use ahash::AHashSet;
use rand::{rngs::StdRng, Rng, SeedableRng};
use stdnum::alphabet::{ALPHANUMERIC, DIGITS, DIGITS_X};
use stdnum::checksum::{damm, luhn, mod_n_2, verhoeff};
use stdnum::{isbn_ranges, Registry, RegistryConfig};

#[cfg(not(feature = "manual_test"))]
fn main() {
    let registry = Registry::new(&RegistryConfig::default()).unwrap();
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(&registry, data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let registry = Registry::new(&RegistryConfig::default()).unwrap();
    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&registry, &input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

fn run_raw_fuzz(registry: &Registry, bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(registry, input_str, rng);

    Some(())
}

/// Random digits, the input only picks the length.
fn gen_digits(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

fn run_fuzz(registry: &Registry, input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    // arbitrary input must never panic
    let tokens: AHashSet<&str> = registry.tokens().collect();
    for token in &tokens {
        let _ = registry.is_valid(token, input);
        let _ = registry.format(token, input);
    }
    let _ = registry.check_vatin(input);

    // a computed check character always validates
    let payload = gen_digits(&mut rng, 1 + input.len() % 24);
    let check = mod_n_2::check_digit(&payload, &DIGITS_X).unwrap();
    assert!(mod_n_2::is_valid(&format!("{payload}{check}"), &DIGITS_X));
    let check = luhn::check_digit(&payload, &DIGITS).unwrap();
    assert!(luhn::is_valid(&format!("{payload}{check}"), &DIGITS));
    if let Ok(check) = mod_n_2::check_digit(input, &ALPHANUMERIC) {
        assert!(mod_n_2::is_valid(&format!("{input}{check}"), &ALPHANUMERIC));
    }
    let check = verhoeff::check_digit(&payload).unwrap();
    assert!(verhoeff::is_valid(&format!("{payload}{check}")));
    let check = damm::check_digit(&payload).unwrap();
    assert!(damm::is_valid(&format!("{payload}{check}")));

    // the segments of a decomposition concatenate back to the looked up digits
    let digits = format!("97{}", gen_digits(&mut rng, 11));
    if let Ok(parts) = isbn_ranges().unwrap().split(&digits) {
        assert_eq!(parts.concat(), digits);
    }

    #[cfg(feature = "manual_test")]
    {
        println!("Payload: {:?}", payload);
        println!("Digits: {:?}", digits);
    }
}
