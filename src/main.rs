use jvalues::config::Config;
use jvalues::date_gen::DateTimeGenerator;
use jvalues::engines::{McmParameterization, ReferenceLibrary, SpectralIntegrator};
use jvalues::{Engines, photolysis_rates};
use log::info;

const DEFAULT_CONFIG: &str = "./data/config/simple_config.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = Config::from_file(&config_path)?;
    info!("loaded configuration from {config_path}");

    let datetimes = DateTimeGenerator::new(config.clone()).generate_datetime_series();
    let state = config.atmospheric_state(&datetimes);

    let library_path = config
        .reference_library()
        .ok_or("reference_library must be set in the configuration")?;
    let library = ReferenceLibrary::from_file(library_path)?;
    let table = McmParameterization;
    let spectral = SpectralIntegrator::default();
    let engines = Engines::new(&table, &spectral, &library);

    println!(
        "Computing photolysis rates with strategy {} at {} timestamps...",
        config.strategy(),
        datetimes.len()
    );

    let rates = photolysis_rates(&state, config.strategy(), &engines)?;
    print!("{rates}");

    Ok(())
}
