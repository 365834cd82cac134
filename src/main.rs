use log::{error, info};
use std::process;

use digitnet::config::InferenceConfig;
use digitnet::data::DataSet;
use digitnet::error::{DigitNetError, Result};
use digitnet::eval::evaluate;
use digitnet::mnist::build_mnist_mlp;

const USAGE: &str = "usage: digitnet <config.json>\n       digitnet <weights_dir> <images_dir> <labels_file>";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("{}", USAGE);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.as_slice() {
        [path] => InferenceConfig::from_file(path)?,
        [weights_dir, images_dir, labels_file] => {
            let config = InferenceConfig::new(weights_dir, images_dir, labels_file);
            config.validate()?;
            config
        }
        _ => {
            return Err(DigitNetError::InvalidConfig(format!(
                "expected 1 or 3 arguments, got {}",
                args.len()
            )))
        }
    };

    let network = build_mnist_mlp(&config.weights_dir)?;
    let input_size = network.input_size()?;
    if config.input.input_len() != input_size {
        return Err(DigitNetError::InvalidConfig(format!(
            "images of {}x{} give {} inputs but the network expects {}",
            config.input.width,
            config.input.height,
            config.input.input_len(),
            input_size
        )));
    }
    info!(
        "network ready: {} layers, {} -> {}",
        network.len(),
        input_size,
        network.output_size()?
    );

    let dataset = DataSet::load(&config.images_dir, &config.labels_file, &config.input)?;
    let report = evaluate(&network, dataset.samples())?;

    println!("ok num = {}", report.correct);
    println!("err num = {}", report.incorrect);
    println!("accuracy = {:.4}", report.accuracy());
    Ok(())
}
