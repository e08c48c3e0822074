#![forbid(unsafe_code)]

// Standard paths
use std::env;
use std::process;

// Crate paths
use compute_sales::process;

fn main() {
    let mut args = env::args().skip(1);
    let (catalogue_file, sales_file) = match (args.next(), args.next(), args.next()) {
        (Some(catalogue_file), Some(sales_file), None) => (catalogue_file, sales_file),
        _ => {
            eprintln!("Usage: <executable> <price_catalogue> <sales_record>");
            process::exit(1);
        }
    };

    if let Err(err) = process(&catalogue_file, &sales_file) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
