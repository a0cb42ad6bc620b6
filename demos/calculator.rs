use exact_numbers::{Complex, Error};
use tracing_subscriber::EnvFilter;

use std::io::{self, prelude::*};

fn evaluate(line: &str) -> Result<Complex, String> {
    let mut parts = line.split_whitespace();
    let (lhs, op, rhs) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(lhs), Some(op), Some(rhs), None) => (lhs, op, rhs),
        _ => return Err("expected <number> <operator> <number>".into())
    };
    let lhs: Complex = lhs.parse().map_err(|err: Error| err.to_string())?;
    let rhs: Complex = rhs.parse().map_err(|err: Error| err.to_string())?;
    match op {
        "+" => Ok(lhs + rhs),
        "-" => Ok(lhs - rhs),
        "*" => Ok(lhs * rhs),
        "/" => lhs.checked_div(&rhs).map_err(|err| err.to_string()),
        _ => Err(format!("unknown operator {:?}, expected one of + - * /", op))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Enter calculations on exact complex numbers, one per line:");
    println!("Example:");
    println!("> 1/2+(1/3)i * 6");
    println!("3+2i");
    println!();

    let stdin = io::stdin();
    let mut failed = false;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match evaluate(&line) {
            Ok(result) => println!("{}", result),
            Err(err) => {
                eprintln!("error: {}", err);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
