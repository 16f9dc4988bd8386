use green_light_timing::duration_estimator::{DurationEstimator, EstimatorConfig};
use green_light_timing::global_variables::TIMING_PLOT_FILE;
use green_light_timing::monitoring::timing_log::{
    log_timing, plot_duration_vs_queue, print_summary, read_timings, show_timings, summarize,
    timing_log_path,
};
use green_light_timing::shared_data::{current_timestamp, Observation, TimingRecord};
use std::io::{stdin, stdout, Write};

fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    stdout().flush().ok()?;
    let mut input = String::new();
    match stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_number(label: &str) -> Option<i64> {
    let raw = prompt(label)?;
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            println!("'{}' is not a whole number.", raw);
            None
        }
    }
}

fn read_observation() -> Option<Observation> {
    Some(Observation {
        queue_length: prompt_number("Queue length: ")?,
        car_count: prompt_number("Cars: ")?,
        truck_count: prompt_number("Trucks: ")?,
        bus_count: prompt_number("Buses: ")?,
        bike_count: prompt_number("Bikes: ")?,
        air_quality_index: prompt_number("AQI: ")?,
        emergency_vehicle_count: prompt_number("Emergency vehicles: ")?,
    })
}

fn compute_and_log(estimator: &DurationEstimator) {
    let Some(observation) = read_observation() else {
        return;
    };
    match estimator.breakdown(&observation) {
        Ok(b) => {
            println!("Queue duration:   {:.2}s", b.queue_duration);
            println!("Vehicle duration: {:.2}s", b.vehicle_duration);
            println!("AQI impact:       x{:.2}", b.aqi_impact);
            println!("EV impact:        x{:.2}", b.ev_impact);
            println!("Green duration:   {:.2}s", b.green_duration_seconds);
            let record =
                TimingRecord::new(current_timestamp(), &observation, b.green_duration_seconds);
            if let Err(e) = log_timing(timing_log_path(), &record) {
                eprintln!("Error logging timing: {}", e);
            }
        }
        Err(e) => eprintln!("Rejected: {}", e),
    }
}

async fn run_cli(estimator: DurationEstimator) {
    loop {
        println!("\nGreen Light Timing Admin CLI");
        println!("1. Compute Green Duration");
        println!("2. Display Timing Log");
        println!("3. Report Summary");
        println!("4. Plot Duration vs Queue Length");
        println!("5. Exit");
        let Some(input) = prompt("Enter your choice: ") else {
            break;
        };
        match input.parse::<u32>().unwrap_or(0) {
            1 => compute_and_log(&estimator),
            2 => {
                if let Err(e) = show_timings(timing_log_path()) {
                    eprintln!("Error displaying timings: {}", e);
                }
            }
            3 => match read_timings(timing_log_path()) {
                Ok(records) => {
                    let config = estimator.config();
                    let summary =
                        summarize(&records, config.base_duration, config.max_green_duration);
                    print_summary(summary.as_ref());
                }
                Err(e) => eprintln!("Error generating report summary: {}", e),
            },
            4 => {
                let result = read_timings(timing_log_path())
                    .map_err(Box::<dyn std::error::Error>::from)
                    .and_then(|records| plot_duration_vs_queue(&records, TIMING_PLOT_FILE));
                if let Err(e) = result {
                    eprintln!("Error plotting timings: {}", e);
                }
            }
            5 => {
                println!("Exiting CLI.");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let estimator = match EstimatorConfig::from_env().and_then(DurationEstimator::new) {
        Ok(estimator) => estimator,
        Err(e) => {
            eprintln!("Estimator config error: {}", e);
            std::process::exit(1);
        }
    };

    run_cli(estimator).await;
}
