use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::{json, Value};
use strata_layout::{merge, OrderedIds};
use strata_scales::utils::coerce_numeric;

use crate::context::ChartContext;
use crate::error::StrataChartError;
use crate::panel::Panel;

/// Tolerance for the standing invariant that panel height shares sum to 1.
pub const PROPORTIONAL_TOLERANCE: f64 = 1e-9;

/// A plot dimension, for proportional-sum queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

/// The top-level chart: plot dimensions plus an ordered, single-column stack
/// of panels. Owns the geometry solver; rendering and data fetching are
/// external collaborators.
#[derive(Debug, Clone)]
pub struct Plot {
    layout: Value,
    width: f64,
    height: f64,
    base_min_width: f64,
    base_min_height: f64,
    min_width: f64,
    min_height: f64,
    aspect_ratio: f64,
    responsive_resize: bool,
    panels: IndexMap<String, Panel>,
    panel_order: OrderedIds,
    ctx: Arc<ChartContext>,
}

impl Plot {
    pub fn default_layout() -> Value {
        json!({
            "width": 800,
            "height": 450,
            "min_width": 400,
            "min_height": 225,
            "responsive_resize": false,
            "panels": []
        })
    }

    /// Build a plot from a partial layout, completed against
    /// [`default_layout`](Self::default_layout).
    ///
    /// Authored `width`/`height` must be finite positive numbers; with
    /// `responsive_resize`, so must `aspect_ratio`. These are authoring
    /// errors and fail construction, unlike runtime resize input which is
    /// silently ignored.
    pub fn new(config: &Value, ctx: Arc<ChartContext>) -> Result<Self, StrataChartError> {
        let layout = merge(config, &Self::default_layout())?;
        let width =
            positive_number(layout.get("width")).ok_or(StrataChartError::InvalidDimensions)?;
        let height =
            positive_number(layout.get("height")).ok_or(StrataChartError::InvalidDimensions)?;
        let base_min_width = positive_number(layout.get("min_width")).unwrap_or(1.0);
        let base_min_height = positive_number(layout.get("min_height")).unwrap_or(1.0);
        let responsive_resize = layout
            .get("responsive_resize")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let aspect_ratio = match layout.get("aspect_ratio") {
            None | Some(Value::Null) => width / height,
            Some(value) => match positive_number(Some(value)) {
                Some(ratio) => ratio,
                None if responsive_resize => return Err(StrataChartError::InvalidAspectRatio),
                None => width / height,
            },
        };

        let mut plot = Self {
            width: width.max(base_min_width),
            height: height.max(base_min_height),
            base_min_width,
            base_min_height,
            min_width: base_min_width,
            min_height: base_min_height,
            aspect_ratio,
            responsive_resize,
            panels: IndexMap::new(),
            panel_order: OrderedIds::new(),
            ctx,
            layout,
        };
        let panel_configs = match plot.layout.get("panels") {
            Some(Value::Array(configs)) => configs.clone(),
            _ => Vec::new(),
        };
        for config in &panel_configs {
            plot.add_panel(config)?;
        }
        Ok(plot)
    }

    /// The fully merged plot-level layout.
    pub fn layout(&self) -> &Value {
        &self.layout
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn is_responsive(&self) -> bool {
        self.responsive_resize
    }

    pub fn panel(&self, id: &str) -> Result<&Panel, StrataChartError> {
        self.panels
            .get(id)
            .ok_or_else(|| StrataChartError::UnknownPanelId(id.to_string()))
    }

    pub fn panel_mut(&mut self, id: &str) -> Result<&mut Panel, StrataChartError> {
        self.panels
            .get_mut(id)
            .ok_or_else(|| StrataChartError::UnknownPanelId(id.to_string()))
    }

    /// Panels in the order they were added.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    /// Panel ids in ascending stack order.
    pub fn panel_ids_by_y_index(&self) -> &[String] {
        self.panel_order.ids()
    }

    /// Add a panel from a partial config. Its `layout_idx` is the insertion
    /// count and its `y_index` resolves through the shared ordering rule;
    /// the whole stack is relaid out afterwards.
    pub fn add_panel(&mut self, config: &Value) -> Result<&Panel, StrataChartError> {
        let mut panel = Panel::new(config, Arc::clone(&self.ctx))?;
        let id = panel.id().to_string();
        if self.panels.contains_key(&id) {
            return Err(StrataChartError::DuplicatePanelId(id));
        }
        panel.set_layout_idx(self.panels.len());
        let requested = panel.requested_y_index();
        self.panel_order.insert(id.clone(), requested);
        self.panels.insert(id.clone(), panel);
        self.sync_y_indices();
        self.autosize_to_panels();
        self.relayout();
        self.panels
            .get(&id)
            .ok_or_else(|| StrataChartError::Internal(format!("panel `{id}` vanished after insert")))
    }

    /// Remove a panel; `layout_idx` and `y_index` values compact to stay
    /// dense, and the remaining stack is relaid out.
    pub fn remove_panel(&mut self, id: &str) -> Result<(), StrataChartError> {
        if self.panels.shift_remove(id).is_none() {
            return Err(StrataChartError::UnknownPanelId(id.to_string()));
        }
        self.panel_order.remove(id);
        for (layout_idx, panel) in self.panels.values_mut().enumerate() {
            panel.set_layout_idx(layout_idx);
        }
        self.sync_y_indices();
        self.autosize_to_panels();
        self.relayout();
        Ok(())
    }

    /// Apply new pixel dimensions from an interactive resize.
    ///
    /// Non-finite or non-positive input never corrupts the current valid
    /// geometry: the call is a silent no-op (logged, not surfaced). One-sided
    /// calls are honored in responsive mode, where the missing dimension
    /// derives from the aspect ratio. Valid input is clamped up to the panel
    /// minimums before the stack is relaid out.
    pub fn set_dimensions(&mut self, width: Option<f64>, height: Option<f64>) -> &mut Self {
        self.update_min_dimensions();
        let requested = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            (None, None) => (self.width, self.height),
            (Some(w), None) if self.responsive_resize => (w, w / self.aspect_ratio),
            (None, Some(h)) if self.responsive_resize => (h * self.aspect_ratio, h),
            _ => {
                warn!("set_dimensions: one-sided resize requires responsive_resize; ignoring");
                return self;
            }
        };
        let (w, h) = requested;
        if !is_valid_dimension(w) || !is_valid_dimension(h) {
            warn!("set_dimensions: ignoring invalid dimensions {w}x{h}");
            return self;
        }
        let mut w = w.max(self.min_width);
        let mut h = h.max(self.min_height);
        if self.responsive_resize {
            // Aspect ratio is authoritative in responsive mode
            h = w / self.aspect_ratio;
            if h < self.min_height {
                h = self.min_height;
                w = (h * self.aspect_ratio).max(self.min_width);
            }
        } else {
            self.aspect_ratio = w / h;
        }
        self.width = w;
        self.height = h;
        self.relayout();
        self
    }

    /// Recompute every panel's proportional share, origins, and pixel
    /// bounds. Height shares of panels that did not author one absorb the
    /// remaining proportion; the final shares always sum to 1 (within
    /// [`PROPORTIONAL_TOLERANCE`]) when any panel exists.
    pub fn relayout(&mut self) {
        self.update_min_dimensions();
        let ids = self.panel_order.ids().to_vec();
        if ids.is_empty() {
            return;
        }
        let (plot_width, plot_height) = (self.width, self.height);

        let mut shares: Vec<Option<f64>> = ids
            .iter()
            .map(|id| {
                self.panels.get(id).and_then(|panel| {
                    panel.authored_proportional_height().or_else(|| {
                        panel
                            .authored_height()
                            .filter(|_| plot_height > 0.0)
                            .map(|h| h / plot_height)
                    })
                })
            })
            .collect();

        let defined_sum: f64 = shares.iter().flatten().sum();
        let unspecified = shares.iter().filter(|share| share.is_none()).count();
        if unspecified > 0 {
            let share = (1.0 - defined_sum).max(0.0) / unspecified as f64;
            for slot in shares.iter_mut() {
                slot.get_or_insert(share);
            }
        }
        let mut shares: Vec<f64> = shares.into_iter().flatten().collect();
        let total: f64 = shares.iter().sum();
        if total <= 0.0 {
            // All authored shares are zero: split the stack evenly
            let share = 1.0 / shares.len() as f64;
            for slot in shares.iter_mut() {
                *slot = share;
            }
        } else if (total - 1.0).abs() > PROPORTIONAL_TOLERANCE {
            for share in shares.iter_mut() {
                *share /= total;
            }
        }

        let mut cursor = 0.0;
        for (id, share) in ids.iter().zip(shares) {
            if let Some(panel) = self.panels.get_mut(id) {
                panel.apply_geometry(share, cursor, plot_width, plot_height);
            }
            cursor += share;
        }
        debug!(
            "relayout: {} panel(s) over {plot_width}x{plot_height}, height shares sum to {cursor}",
            ids.len()
        );
    }

    /// Live sum of panel proportional extents along a dimension; the height
    /// sum is the standing invariant checked after every mutating call.
    pub fn sum_proportional(&self, dimension: Dimension) -> f64 {
        self.panels
            .values()
            .map(|panel| match dimension {
                Dimension::Width => panel.proportional_width(),
                Dimension::Height => panel.proportional_height(),
            })
            .sum()
    }

    /// While panels exist they define the plot minimums: the widest panel
    /// minimum, and the sum of panel minimum heights for the stack.
    fn update_min_dimensions(&mut self) {
        if self.panels.is_empty() {
            self.min_width = self.base_min_width;
            self.min_height = self.base_min_height;
        } else {
            self.min_width = self
                .panels
                .values()
                .map(Panel::min_width)
                .fold(0.0, f64::max);
            self.min_height = self.panels.values().map(Panel::min_height).sum();
        }
    }

    /// When every panel authored an absolute height (and nothing
    /// proportional), the plot height tracks their sum so the stack fits
    /// exactly.
    fn autosize_to_panels(&mut self) {
        self.update_min_dimensions();
        if self.panels.is_empty() {
            return;
        }
        let all_absolute = self.panels.values().all(|panel| {
            panel.authored_height().is_some() && panel.authored_proportional_height().is_none()
        });
        if !all_absolute {
            return;
        }
        let total: f64 = self.panels.values().filter_map(Panel::authored_height).sum();
        if total > 0.0 {
            self.height = total.max(self.min_height);
        }
    }

    fn sync_y_indices(&mut self) {
        let ids = self.panel_order.ids().to_vec();
        for (y_index, id) in ids.iter().enumerate() {
            if let Some(panel) = self.panels.get_mut(id) {
                panel.set_y_index(y_index);
            }
        }
    }
}

fn positive_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(coerce_numeric).filter(|n| *n > 0.0)
}

fn is_valid_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn plot(config: Value) -> Plot {
        Plot::new(&config, Arc::new(ChartContext::new())).unwrap()
    }

    fn small_plot() -> Plot {
        plot(json!({
            "width": 100,
            "height": 100,
            "min_width": 1,
            "min_height": 1,
            "aspect_ratio": 1,
            "panels": []
        }))
    }

    fn assert_height_invariant(plot: &Plot) {
        if plot.panels().count() > 0 {
            assert_approx_eq!(
                f64,
                plot.sum_proportional(Dimension::Height),
                1.0,
                epsilon = PROPORTIONAL_TOLERANCE
            );
        }
    }

    #[test]
    fn test_construction_validates_dimensions() {
        let ctx = Arc::new(ChartContext::new());
        for bad in [
            json!({"width": 0, "height": 0}),
            json!({"width": 20, "height": -20}),
            json!({"width": "foo", "height": 40}),
            json!({"width": 60, "height": [1, 2]}),
        ] {
            assert_eq!(
                Plot::new(&bad, Arc::clone(&ctx)).unwrap_err(),
                StrataChartError::InvalidDimensions
            );
        }
    }

    #[test]
    fn test_construction_validates_responsive_aspect_ratio() {
        let ctx = Arc::new(ChartContext::new());
        for bad_ratio in [json!(0), json!(-1), json!("foo"), json!([1, 2, 3])] {
            let config = json!({"responsive_resize": true, "aspect_ratio": bad_ratio});
            assert_eq!(
                Plot::new(&config, Arc::clone(&ctx)).unwrap_err(),
                StrataChartError::InvalidAspectRatio
            );
        }
        // Without responsive_resize a malformed ratio falls back to width/height
        let plot = plot(json!({"width": 100, "height": 50, "aspect_ratio": "foo"}));
        assert_approx_eq!(f64, plot.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_add_panels_assigns_layout_idx() {
        let mut plot = small_plot();
        let panel_a = plot.add_panel(&json!({"id": "panelA", "foo": "bar"})).unwrap();
        assert_eq!(panel_a.id(), "panelA");
        assert_eq!(panel_a.layout_idx(), 0);
        assert_eq!(panel_a.layout()["foo"], json!("bar"));
        let panel_b = plot.add_panel(&json!({"id": "panelB", "foo": "baz"})).unwrap();
        assert_eq!(panel_b.layout_idx(), 1);
        assert_eq!(plot.panels().count(), 2);
        assert_height_invariant(&plot);

        assert_eq!(
            plot.add_panel(&json!({"id": "panelA"})).unwrap_err(),
            StrataChartError::DuplicatePanelId("panelA".to_string())
        );
        assert_eq!(
            plot.add_panel(&json!({})).unwrap_err(),
            StrataChartError::MissingPanelId
        );
    }

    #[test]
    fn test_remove_panel_compacts_layout_idx() {
        let mut plot = small_plot();
        plot.add_panel(&json!({"id": "panelA"})).unwrap();
        plot.add_panel(&json!({"id": "panelB"})).unwrap();
        plot.remove_panel("panelA").unwrap();
        assert!(plot.panel("panelA").is_err());
        assert_eq!(plot.panel("panelB").unwrap().layout_idx(), 0);
        assert_eq!(plot.panel_ids_by_y_index(), ["panelB"]);
        assert_height_invariant(&plot);
        assert_eq!(
            plot.remove_panel("panelA").unwrap_err(),
            StrataChartError::UnknownPanelId("panelA".to_string())
        );
    }

    #[test]
    fn test_set_dimensions_bounded_by_minimums() {
        let mut plot = small_plot();
        plot.set_dimensions(Some(563.0), Some(681.0));
        assert_approx_eq!(f64, plot.width(), 563.0);
        assert_approx_eq!(f64, plot.height(), 681.0);
        assert_approx_eq!(f64, plot.aspect_ratio(), 563.0 / 681.0);

        // Invalid input is silently ignored, current geometry retained
        plot.set_dimensions(Some(1320.3), Some(-50.0));
        assert_approx_eq!(f64, plot.width(), 563.0);
        assert_approx_eq!(f64, plot.height(), 681.0);
        assert_approx_eq!(f64, plot.aspect_ratio(), 563.0 / 681.0);
        plot.set_dimensions(Some(f64::NAN), Some(0.0));
        assert_approx_eq!(f64, plot.width(), 563.0);
        assert_approx_eq!(f64, plot.height(), 681.0);
        plot.set_dimensions(Some(f64::INFINITY), Some(100.0));
        assert_approx_eq!(f64, plot.width(), 563.0);

        // Valid but tiny input clamps up to the minimums
        plot.set_dimensions(Some(1.0), Some(1.0));
        assert_approx_eq!(f64, plot.width(), plot.min_width());
        assert_approx_eq!(f64, plot.height(), plot.min_height());
        assert_approx_eq!(f64, plot.aspect_ratio(), plot.min_width() / plot.min_height());
    }

    #[test]
    fn test_panel_minimums_floor_the_plot() {
        let mut plot = small_plot();
        plot.add_panel(&json!({"id": "p1", "width": 50, "height": 30, "min_width": 50, "min_height": 30}))
            .unwrap();
        plot.add_panel(&json!({"id": "p2", "width": 20, "height": 10, "min_width": 20, "min_height": 10}))
            .unwrap();
        plot.set_dimensions(Some(1.0), Some(1.0));
        assert_approx_eq!(f64, plot.min_width(), 50.0);
        assert_approx_eq!(f64, plot.min_height(), 40.0);
        assert_approx_eq!(f64, plot.width(), 50.0);
        assert_approx_eq!(f64, plot.height(), 40.0);
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_single_absolute_panel_resizes_plot() {
        let mut plot = plot(json!({
            "width": 100, "height": 100, "min_width": 100, "min_height": 100,
            "aspect_ratio": 1, "panels": []
        }));
        plot.add_panel(&json!({"id": "panelA", "width": 100, "height": 50}))
            .unwrap();
        assert_approx_eq!(f64, plot.width(), 100.0);
        assert_approx_eq!(f64, plot.height(), 50.0);
        let panel = plot.panel("panelA").unwrap();
        assert_approx_eq!(f64, panel.width(), 100.0);
        assert_approx_eq!(f64, panel.height(), 50.0);
        assert_approx_eq!(f64, panel.proportional_height(), 1.0);
        assert_approx_eq!(f64, panel.proportional_origin().y, 0.0);
        assert_approx_eq!(f64, panel.origin().y, 0.0);
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_absolute_panels_stack_without_overlap() {
        let mut plot = plot(json!({
            "width": 100, "height": 100, "min_width": 100, "min_height": 100,
            "aspect_ratio": 1, "panels": []
        }));
        plot.add_panel(&json!({"id": "panelA", "width": 100, "height": 60}))
            .unwrap();
        plot.add_panel(&json!({"id": "panelB", "width": 100, "height": 60}))
            .unwrap();
        assert_approx_eq!(f64, plot.height(), 120.0);
        let panel_a = plot.panel("panelA").unwrap();
        assert_approx_eq!(f64, panel_a.proportional_height(), 0.5);
        assert_approx_eq!(f64, panel_a.origin().y, 0.0);
        let panel_b = plot.panel("panelB").unwrap();
        assert_approx_eq!(f64, panel_b.proportional_height(), 0.5);
        assert_approx_eq!(f64, panel_b.proportional_origin().y, 0.5);
        assert_approx_eq!(f64, panel_b.origin().y, 60.0);
        assert_approx_eq!(f64, panel_b.origin().x, 0.0);
        assert_height_invariant(&plot);

        // Removing a panel shrinks the stack back
        plot.remove_panel("panelA").unwrap();
        assert_approx_eq!(f64, plot.height(), 60.0);
        let panel_b = plot.panel("panelB").unwrap();
        assert_approx_eq!(f64, panel_b.proportional_height(), 1.0);
        assert_approx_eq!(f64, panel_b.origin().y, 0.0);
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_unsized_panels_absorb_remaining_share() {
        let mut plot = small_plot();
        plot.add_panel(&json!({"id": "a", "proportional_height": 0.5})).unwrap();
        plot.add_panel(&json!({"id": "b"})).unwrap();
        plot.add_panel(&json!({"id": "c"})).unwrap();
        assert_approx_eq!(f64, plot.panel("a").unwrap().proportional_height(), 0.5);
        assert_approx_eq!(f64, plot.panel("b").unwrap().proportional_height(), 0.25);
        assert_approx_eq!(f64, plot.panel("c").unwrap().proportional_height(), 0.25);
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_zero_height_shares_fall_back_to_even_split() {
        let mut plot = small_plot();
        plot.add_panel(&json!({"id": "a", "proportional_height": 0})).unwrap();
        plot.add_panel(&json!({"id": "b", "proportional_height": 0})).unwrap();
        assert_approx_eq!(f64, plot.panel("a").unwrap().proportional_height(), 0.5);
        assert_approx_eq!(f64, plot.panel("b").unwrap().proportional_height(), 0.5);
        assert_approx_eq!(f64, plot.panel("b").unwrap().proportional_origin().y, 0.5);
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_overcommitted_shares_normalize() {
        let mut plot = small_plot();
        plot.add_panel(&json!({"id": "a", "proportional_height": 0.6})).unwrap();
        plot.add_panel(&json!({"id": "b", "proportional_height": 0.6})).unwrap();
        assert_approx_eq!(f64, plot.panel("a").unwrap().proportional_height(), 0.5);
        assert_approx_eq!(f64, plot.panel("b").unwrap().proportional_height(), 0.5);
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_insert_panel_at_discrete_y_index() {
        let mut plot = small_plot();
        plot.add_panel(&json!({"id": "panelA", "height": 60})).unwrap();
        plot.add_panel(&json!({"id": "panelB", "height": 60})).unwrap();
        plot.add_panel(&json!({"id": "panelC", "height": 60, "y_index": 1})).unwrap();
        assert_eq!(plot.panel("panelA").unwrap().y_index(), 0);
        assert_eq!(plot.panel("panelB").unwrap().y_index(), 2);
        assert_eq!(plot.panel("panelC").unwrap().y_index(), 1);
        assert_eq!(plot.panel_ids_by_y_index(), ["panelA", "panelC", "panelB"]);
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_insert_panel_at_negative_y_index() {
        let mut plot = small_plot();
        for id in ["panelA", "panelB", "panelC", "panelD"] {
            plot.add_panel(&json!({"id": id, "height": 60})).unwrap();
        }
        plot.add_panel(&json!({"id": "panelE", "height": 60, "y_index": -1})).unwrap();
        assert_eq!(plot.panel("panelA").unwrap().y_index(), 0);
        assert_eq!(plot.panel("panelB").unwrap().y_index(), 1);
        assert_eq!(plot.panel("panelC").unwrap().y_index(), 2);
        assert_eq!(plot.panel("panelD").unwrap().y_index(), 4);
        assert_eq!(plot.panel("panelE").unwrap().y_index(), 3);
        assert_eq!(
            plot.panel_ids_by_y_index(),
            ["panelA", "panelB", "panelC", "panelE", "panelD"]
        );
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_y_index_permutation_stays_dense_under_churn() {
        let mut plot = small_plot();
        plot.add_panel(&json!({"id": "a"})).unwrap();
        plot.add_panel(&json!({"id": "b", "y_index": 0})).unwrap();
        plot.add_panel(&json!({"id": "c", "y_index": -2})).unwrap();
        plot.remove_panel("b").unwrap();
        plot.add_panel(&json!({"id": "d", "y_index": 99})).unwrap();
        let mut y_indices: Vec<usize> = plot.panels().map(Panel::y_index).collect();
        y_indices.sort_unstable();
        assert_eq!(y_indices, vec![0, 1, 2]);
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_responsive_layout_preserves_authored_shares() {
        let mut plot = plot(json!({
            "width": 800,
            "height": 400,
            "responsive_resize": true,
            "aspect_ratio": 2,
            "panels": [
                {"id": "positions", "proportional_width": 1, "proportional_height": 0.6, "min_height": 60},
                {"id": "genes", "proportional_width": 1, "proportional_height": 0.4, "min_height": 40}
            ]
        }));
        let shares = |plot: &Plot| {
            (
                plot.panel("positions").unwrap().height() / plot.height(),
                plot.panel("genes").unwrap().height() / plot.height(),
            )
        };
        let (positions, genes) = shares(&plot);
        assert_approx_eq!(f64, positions, 0.6);
        assert_approx_eq!(f64, genes, 0.4);

        plot.set_dimensions(Some(2000.0), None);
        assert_approx_eq!(f64, plot.height(), 1000.0);
        let (positions, genes) = shares(&plot);
        assert_approx_eq!(f64, positions, 0.6);
        assert_approx_eq!(f64, genes, 0.4);

        plot.set_dimensions(Some(900.0), Some(900.0));
        let (positions, genes) = shares(&plot);
        assert_approx_eq!(f64, positions, 0.6);
        assert_approx_eq!(f64, genes, 0.4);

        // Clamped by the summed panel minimum heights
        plot.set_dimensions(Some(100.0), Some(100.0));
        assert_approx_eq!(f64, plot.height(), 100.0);
        assert_approx_eq!(f64, plot.width(), 200.0);
        let (positions, genes) = shares(&plot);
        assert_approx_eq!(f64, positions, 0.6);
        assert_approx_eq!(f64, genes, 0.4);
        assert_height_invariant(&plot);
    }

    #[test]
    fn test_one_sided_resize_requires_responsive_mode() {
        let mut plot = small_plot();
        plot.set_dimensions(Some(500.0), None);
        assert_approx_eq!(f64, plot.width(), 100.0);
        assert_approx_eq!(f64, plot.height(), 100.0);
    }

    #[test]
    fn test_origins_accumulate_in_stack_order() {
        let mut plot = small_plot();
        plot.set_dimensions(Some(100.0), Some(200.0));
        plot.add_panel(&json!({"id": "a", "proportional_height": 0.25})).unwrap();
        plot.add_panel(&json!({"id": "b", "proportional_height": 0.5})).unwrap();
        plot.add_panel(&json!({"id": "c", "proportional_height": 0.25})).unwrap();
        let origin_ys: Vec<f64> = plot
            .panel_ids_by_y_index()
            .iter()
            .map(|id| plot.panel(id).unwrap().origin().y)
            .collect();
        assert_approx_eq!(f64, origin_ys[0], 0.0);
        assert_approx_eq!(f64, origin_ys[1], 50.0);
        assert_approx_eq!(f64, origin_ys[2], 150.0);
        for id in plot.panel_ids_by_y_index() {
            assert_approx_eq!(f64, plot.panel(id).unwrap().origin().x, 0.0);
        }
        assert_height_invariant(&plot);
    }
}
