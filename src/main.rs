use std::env;
use std::error::Error;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use log::info;

use tsp_search::config::DemoConfig;
use tsp_search::tour_view::TourView;

const USAGE: &str = "usage: tsp_search [CONFIG.json | --random <cities>]";

fn load_config() -> Result<DemoConfig, Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(DemoConfig::default()),
        [flag, cities] if flag == "--random" => {
            let cities: usize = cities.parse()?;
            Ok(DemoConfig::random(cities, &mut rand::thread_rng()))
        }
        [path] if !path.starts_with("--") => Ok(DemoConfig::load(path)?),
        _ => Err(USAGE.into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = load_config()?;
    info!(
        "{} cities, start city {}, strategies {:?}",
        config.matrix.size(),
        config.start_city,
        config.strategies
    );

    let mut view = TourView::new("Distance Matrix", &config.matrix, config.step_delay());
    if config.animate {
        TourView::clear_screen();
        TourView::reset_cursor();
        view.display();
        thread::sleep(Duration::from_millis(1000));
    } else {
        print!("{}", view.render());
    }

    let mut report = Vec::new();
    for &strategy in &config.strategies {
        let outcome = strategy.run(&config.matrix, config.start_city)?;
        match outcome.tour {
            Some(tour) => {
                let cost = tour.cost(&config.matrix)?;
                if config.animate {
                    view.set_title(strategy.title());
                    view.display_tour(&tour)?;
                    thread::sleep(Duration::from_millis(1000));
                }
                report.push(TourView::summary(strategy.label(), &tour, cost));
            }
            None => {
                report.push(format!("{} Path: {}", strategy.label().bold(), "no solution".red()));
            }
        }
        report.push(TourView::stats_line(&outcome.stats).to_string());
    }

    println!();
    for line in report {
        println!("{}", line);
    }
    Ok(())
}
