//! Fill empty page plots with fetched data

use trellis_core::Plot;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlotsService;

impl PlotsService {
    /// Copy data of `fetched` plots into `empty` plots with the same
    /// trellising key; unmatched plots keep no data
    pub fn merge(&self, empty: &[Plot], fetched: &[Plot]) -> Vec<Plot> {
        let keyed: Vec<_> = fetched
            .iter()
            .filter(|p| p.data.is_some())
            .map(|p| (p.trellising_key(), p))
            .collect();

        let merged: Vec<Plot> = empty
            .iter()
            .map(|plot| {
                let key = plot.trellising_key();
                match keyed.iter().find(|(k, _)| *k == key) {
                    Some((_, source)) => Plot {
                        data: source.data.clone(),
                        ..plot.clone()
                    },
                    None => plot.clone(),
                }
            })
            .collect();

        tracing::debug!(
            "Merged data into {} of {} plots",
            merged.iter().filter(|p| p.data.is_some()).count(),
            merged.len()
        );
        merged
    }
}
