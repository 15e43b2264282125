use train_registry::utils::logger;
use train_registry::{LocalStorage, SentencePipeline};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let pipeline = SentencePipeline::new(LocalStorage::default());
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    match pipeline.run(&mut out, &mut err)? {
        Some(sentences) => tracing::debug!("Pipeline finished with {} sentences", sentences.len()),
        None => tracing::debug!("Pipeline stopped early"),
    }

    Ok(())
}
