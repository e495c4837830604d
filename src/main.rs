use sosu_bunkatsu::config::{load_config, SETTINGS_FILE};
use sosu_bunkatsu::cpu_engine::generate_primes;
use sosu_bunkatsu::engine_types::PrimeResult;
use sosu_bunkatsu::logging::init_logger;
use sosu_bunkatsu::report::RunReport;
use sosu_bunkatsu::verify::verify_primes;

fn main() -> PrimeResult<()> {
    init_logger();

    // settings.toml があれば読み、無ければ既定値（N = 1 億）で 1 回だけ計測する。
    let cfg = load_config(SETTINGS_FILE)?;

    let outcome = generate_primes(&cfg)?;
    let report = RunReport::new(cfg.prime_max, &outcome);

    if cfg.verify_tail > 0 {
        let verified = verify_primes(&outcome.primes, cfg.verify_tail)?;
        log::info!(
            "Verified {} primes (Miller-Rabin on last {})",
            verified.count,
            verified.checked_tail
        );
    }

    log::info!("{}", report.to_json()?);
    println!("{}", report.elapsed_secs());
    Ok(())
}
