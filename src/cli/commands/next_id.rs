use crate::config::Config;
use crate::core::sequence::SequenceLogic;
use crate::errors::AppResult;

/// Print the cycle number the next `add` will use.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let next = match super::connect(cfg) {
        Ok(mut store) => SequenceLogic::next_id(&mut store, &cfg.table_name),
        Err(e) => {
            tracing::debug!(error = %e, "next-id: store not reachable");
            1
        }
    };
    println!("{next}");
    Ok(())
}
