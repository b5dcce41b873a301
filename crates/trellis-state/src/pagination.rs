//! Trellis option combinations and their page windows

use crate::PaginationConfig;
use trellis_core::{Plot, PlotType, TrellisOption, Trellises};

// ============================================================================
// STRATEGY PATTERN: Trellis Pagination
// ============================================================================

/// Shared combination arithmetic of the pagination services
pub trait TrellisPagination: Send + Sync {
    /// Cartesian product of `option_sets` as one column per set.
    ///
    /// Column `i` holds the option of set `i` for every combination; all
    /// columns have the same length. The first set varies slowest.
    fn calculate_trellis_combination_for_each_chart(&self, option_sets: &[Vec<String>]) -> Vec<Vec<String>> {
        transpose(combination_rows(option_sets), option_sets.len())
    }

    /// Total number of plots a trellis selection produces, saturating at `usize::MAX`
    fn combination_count(&self, trellises: &[Trellises]) -> usize {
        plot_dimensions(trellises)
            .map(|t| t.trellis_options.len())
            .try_fold(1usize, usize::checked_mul)
            .unwrap_or(usize::MAX)
    }
}

/// Dimensions that split plots; series dimensions stay inside a plot
pub fn plot_dimensions(trellises: &[Trellises]) -> impl Iterator<Item = &Trellises> {
    trellises.iter().filter(|t| !t.is_series())
}

fn combination_rows(option_sets: &[Vec<String>]) -> Vec<Vec<String>> {
    if option_sets.is_empty() {
        return Vec::new();
    }

    option_sets.iter().fold(vec![Vec::new()], |rows, options| {
        rows.iter()
            .flat_map(|row| {
                options.iter().map(move |option| {
                    let mut next = row.clone();
                    next.push(option.clone());
                    next
                })
            })
            .collect()
    })
}

fn transpose(rows: Vec<Vec<String>>, width: usize) -> Vec<Vec<String>> {
    let mut columns = vec![Vec::with_capacity(rows.len()); width];
    for row in rows {
        for (column, option) in columns.iter_mut().zip(row) {
            column.push(option);
        }
    }
    columns
}

/// Rows `[offset - 1, offset - 1 + limit)` of the plot-splitting combinations
/// as trellis option bindings, clamped to what exists
fn page_rows<P: TrellisPagination + ?Sized>(
    service: &P,
    trellises: &[Trellises],
    window: PaginationConfig,
) -> Vec<Vec<TrellisOption>> {
    let dimensions: Vec<&Trellises> = plot_dimensions(trellises).collect();
    if dimensions.is_empty() {
        // A selection without plot dimensions is a single plot
        return if window.offset <= 1 && window.limit > 0 {
            vec![Vec::new()]
        } else {
            Vec::new()
        };
    }

    let option_sets: Vec<Vec<String>> = dimensions.iter().map(|t| t.trellis_options.clone()).collect();
    let columns = service.calculate_trellis_combination_for_each_chart(&option_sets);
    let total = columns.first().map_or(0, Vec::len);

    let start = window.offset.saturating_sub(1).min(total);
    let end = start.saturating_add(window.limit).min(total);

    (start..end)
        .map(|row| {
            dimensions
                .iter()
                .zip(&columns)
                .map(|(dimension, column)| {
                    TrellisOption::new(dimension.category, dimension.trellised_by.clone(), column[row].clone())
                })
                .collect()
        })
        .collect()
}

// ============================================================================
// SERVICES
// ============================================================================

/// Number of pages of a trellis selection
#[derive(Debug, Clone, Copy, Default)]
pub struct PagesService;

impl TrellisPagination for PagesService {}

impl PagesService {
    pub fn pages(&self, trellises: &[Trellises], limit: usize) -> usize {
        if limit == 0 {
            tracing::warn!("Page count requested with a zero page size");
            return 0;
        }
        self.combination_count(trellises).div_ceil(limit)
    }
}

/// Empty plots of one page, waiting for their data
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPlotsService;

impl TrellisPagination for EmptyPlotsService {}

impl EmptyPlotsService {
    pub fn generate_empty_plots(
        &self,
        limit: usize,
        offset: usize,
        trellises: &[Trellises],
        plot_type: PlotType,
    ) -> Vec<Plot> {
        let series: Vec<Trellises> = trellises.iter().filter(|t| t.is_series()).cloned().collect();

        let plots: Vec<Plot> = page_rows(self, trellises, PaginationConfig::new(limit, offset))
            .into_iter()
            .map(|trellising| {
                Plot::new(plot_type)
                    .with_trellising(trellising)
                    .with_series(series.clone())
            })
            .collect();

        tracing::debug!("Generated {} empty {} plots at offset {}", plots.len(), plot_type, offset);
        plots
    }
}

/// Trellis selection restricted to the options visible on one page
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginatedTrellisService;

impl TrellisPagination for PaginatedTrellisService {}

impl PaginatedTrellisService {
    /// Per dimension, the options used by the page's plots in their original
    /// order; series dimensions pass through unchanged
    pub fn paginated_trellis(&self, trellises: &[Trellises], limit: usize, offset: usize) -> Vec<Trellises> {
        let rows = page_rows(self, trellises, PaginationConfig::new(limit, offset));

        trellises
            .iter()
            .map(|trellis| {
                if trellis.is_series() {
                    return trellis.clone();
                }
                let visible = trellis
                    .trellis_options
                    .iter()
                    .filter(|option| {
                        rows.iter().flatten().any(|o| {
                            o.trellised_by == trellis.trellised_by && o.trellis_option == **option
                        })
                    })
                    .cloned();
                Trellises::new(trellis.category, trellis.trellised_by.clone(), visible)
            })
            .collect()
    }
}
