// Standard paths
use std::time::Instant;

// Crate paths
use api::catalogue::PriceIndex;
use api::engine::error::EngineError;
use api::engine::Engine;
use api::error::ComputeSalesError;
use api::input::load_records;
use api::report::Report;

// Crate modules
pub mod api;

pub fn process(catalogue_file: &str, sales_file: &str) -> Result<(), ComputeSalesError> {
    let catalogue = load_records(catalogue_file)?;
    let sales = load_records(sales_file)?;

    // Timer covers only the computation, not loading or reporting
    let started = Instant::now();

    let mut prices = PriceIndex::new();
    for entry in catalogue {
        if let Err(err) = prices.add(entry) {
            eprintln!("Error: {}", err);
        }
    }

    let mut engine = Engine::new(prices);
    for record in sales {
        match engine.charge(record) {
            Ok(()) => {}
            Err(EngineError::ProductNotFound(product)) => {
                println!(" Product {} not found in the price catalogue.", product);
            }
            Err(err) => eprintln!("Error: {}", err),
        }
    }

    let report = Report::new(engine.total(), started.elapsed());

    println!("{}", report.total_line());
    report.save()?;

    Ok(())
}
