//! Plan cache for hosts that lay out the same tags repeatedly.
//!
//! The cache stores (content_hash, width, mode, row cap) -> LayoutPlan.
//! Arrangement is cheap and always recomputed; only the two-pass plan is
//! reused. Any change to the items, the indicator, the row width or the
//! mode produces a different key, so a stale plan is never served.

use std::collections::HashMap;

use crate::config::{FlowConfig, FlowMode};
use crate::error::Result;

use super::constraints::ContainerConstraints;
use super::engine::{FlowLayout, FlowLayoutResult};
use super::item::{Item, Visibility};
use super::shrink::LayoutPlan;

/// FNV-1a prime for hash mixing.
const FNV_PRIME: u64 = 0x100000001b3;
/// FNV-1a offset basis.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;

/// Layout calls a plan survives in [`FlowState`] without being reused.
pub const PLAN_MAX_AGE: u64 = 8;

/// The key for a cached plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanKey {
    /// Hash of every item's measurements plus the indicator's.
    pub content_hash: u64,
    /// Bit pattern of the max row width.
    pub width_bits: u32,
    pub mode: FlowMode,
    pub max_rows: usize,
    pub reserved_leading: usize,
}

impl PlanKey {
    /// Key for laying out `items` under `config` and `constraints`.
    pub fn new(
        items: &[Item],
        indicator: Option<&Item>,
        config: &FlowConfig,
        constraints: &ContainerConstraints,
    ) -> Self {
        Self {
            content_hash: content_hash(items, indicator),
            width_bits: constraints.max_row_width(&config.padding).to_bits(),
            mode: config.mode,
            max_rows: config.max_rows,
            reserved_leading: config.reserved_leading,
        }
    }
}

#[inline]
fn mix(hash: u64, value: u64) -> u64 {
    (hash ^ value).wrapping_mul(FNV_PRIME)
}

fn hash_item(mut hash: u64, item: &Item) -> u64 {
    for value in [
        item.width,
        item.height,
        item.margins.left,
        item.margins.top,
        item.margins.right,
        item.margins.bottom,
    ] {
        hash = mix(hash, value.to_bits() as u64);
    }
    mix(hash, matches!(item.visibility, Visibility::Gone) as u64)
}

/// Hash the measurements that influence a plan.
pub fn content_hash(items: &[Item], indicator: Option<&Item>) -> u64 {
    let mut hash = mix(FNV_OFFSET, items.len() as u64);
    for item in items {
        hash = hash_item(hash, item);
    }
    match indicator {
        Some(indicator) => hash_item(mix(hash, 1), indicator),
        None => mix(hash, 0),
    }
}

#[derive(Debug, Clone, Copy)]
struct CachedPlan {
    plan: LayoutPlan,
    generation: u64,
}

/// A persistent plan cache, retained across frames.
#[derive(Debug, Default)]
pub struct PlanCache {
    entries: HashMap<PlanKey, CachedPlan>,
    /// Current frame generation (for expiry tracking)
    generation: u64,
    hits: u64,
    misses: u64,
}

impl PlanCache {
    /// An empty cache at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame. Old entries are kept until [`gc`](Self::gc).
    pub fn begin_frame(&mut self) {
        self.generation += 1;
    }

    /// Look up a plan, marking it used this frame.
    #[inline]
    pub fn get(&mut self, key: &PlanKey) -> Option<LayoutPlan> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.generation = self.generation;
                self.hits += 1;
                Some(entry.plan)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a plan, stamped with the current frame.
    #[inline]
    pub fn insert(&mut self, key: PlanKey, plan: LayoutPlan) {
        self.entries.insert(key, CachedPlan {
            plan,
            generation: self.generation,
        });
    }

    /// Remove entries not accessed in the last `max_age` frames.
    pub fn gc(&mut self, max_age: u64) {
        let cutoff = self.generation.saturating_sub(max_age);
        self.entries.retain(|_, entry| entry.generation >= cutoff);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

/// A flow layout that remembers its plans.
#[derive(Debug, Default)]
pub struct FlowState {
    layout: FlowLayout,
    cache: PlanCache,
}

impl FlowState {
    /// Create a state with an empty plan cache.
    pub fn new(config: FlowConfig) -> Self {
        Self {
            layout: FlowLayout::new(config),
            cache: PlanCache::new(),
        }
    }

    /// Current config.
    pub fn config(&self) -> &FlowConfig {
        self.layout.config()
    }

    /// Replace the config; cached plans for other configs stay until aged out.
    pub fn set_config(&mut self, config: FlowConfig) {
        self.layout.set_config(config);
    }

    /// Current presentation mode.
    pub fn mode(&self) -> FlowMode {
        self.layout.config().mode
    }

    /// Switch between SHRINK and EXPAND; returns the new mode.
    pub fn toggle_mode(&mut self) -> FlowMode {
        let mut config = *self.layout.config();
        config.mode = config.mode.toggled();
        self.layout.set_config(config);
        config.mode
    }

    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut PlanCache {
        &mut self.cache
    }

    /// Lay out, reusing the plan when nothing relevant changed.
    ///
    /// Each call is one cache frame; plans unused for [`PLAN_MAX_AGE`]
    /// calls are dropped, so resizing through many widths stays bounded.
    pub fn layout(
        &mut self,
        items: &[Item],
        indicator: Option<&Item>,
        constraints: ContainerConstraints,
    ) -> Result<FlowLayoutResult> {
        self.layout.validate(items, indicator, constraints)?;

        self.cache.begin_frame();
        self.cache.gc(PLAN_MAX_AGE);

        let key = PlanKey::new(items, indicator, self.layout.config(), &constraints);
        let plan = match self.cache.get(&key) {
            Some(plan) => {
                tracing::trace!("plan cache hit: {:?}", key);
                plan
            }
            None => {
                tracing::trace!("plan cache miss: {:?}", key);
                let plan = self.layout.plan_validated(items, indicator, constraints)?;
                self.cache.insert(key, plan);
                plan
            }
        };

        self.layout.arrange(items, indicator, constraints, &plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<Item> {
        (5..15).map(|i| Item::new(i as f32 * 10.0, 20.0)).collect()
    }

    fn key(width: f32) -> PlanKey {
        PlanKey::new(&tags(), None, &FlowConfig::default(), &ContainerConstraints::with_max_width(width))
    }

    fn plan() -> LayoutPlan {
        FlowLayout::default()
            .plan(&tags(), Some(&Item::new(40.0, 20.0)), ContainerConstraints::with_max_width(200.0))
            .unwrap()
    }

    #[test]
    fn test_cache_insert_get() {
        let mut cache = PlanCache::new();
        cache.insert(key(200.0), plan());
        assert_eq!(cache.get(&key(200.0)), Some(plan()));
        assert_eq!(cache.get(&key(300.0)), None);
        assert_eq!(cache.stats(), (1, 1));
    }

    #[test]
    fn test_cache_gc() {
        let mut cache = PlanCache::new();
        cache.insert(key(100.0), plan());
        cache.begin_frame();
        cache.begin_frame();
        cache.insert(key(200.0), plan());

        cache.gc(1);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key(100.0)), None);
        assert!(cache.get(&key(200.0)).is_some());
    }

    #[test]
    fn test_content_hash_tracks_changes() {
        let items = tags();
        let base = content_hash(&items, None);
        assert_eq!(base, content_hash(&tags(), None));

        let mut resized = tags();
        resized[3].width += 1.0;
        assert_ne!(base, content_hash(&resized, None));

        let mut hidden = tags();
        hidden[3] = hidden[3].gone();
        assert_ne!(base, content_hash(&hidden, None));

        assert_ne!(base, content_hash(&items, Some(&Item::new(40.0, 20.0))));
        assert_ne!(base, content_hash(&items[..9], None));
    }

    #[test]
    fn test_flow_state_reuses_plan() {
        let items = tags();
        let more = Item::new(40.0, 20.0);
        let constraints = ContainerConstraints::with_max_width(200.0);
        let mut state = FlowState::new(FlowConfig::default());

        let first = state.layout(&items, Some(&more), constraints).unwrap();
        let second = state.layout(&items, Some(&more), constraints).unwrap();

        assert_eq!(first, second);
        assert_eq!(state.cache().stats(), (1, 1));
    }

    #[test]
    fn test_flow_state_recomputes_on_width_and_mode_change() {
        let items = tags();
        let more = Item::new(40.0, 20.0);
        let mut state = FlowState::new(FlowConfig::default());

        let narrow = state.layout(&items, Some(&more), ContainerConstraints::with_max_width(200.0)).unwrap();
        assert!(narrow.plan.needs_indicator);

        let wide = state.layout(&items, Some(&more), ContainerConstraints::with_max_width(1000.0)).unwrap();
        assert!(!wide.plan.needs_indicator);
        assert_eq!(wide.plan.max_show_count, 10);

        assert_eq!(state.toggle_mode(), FlowMode::Expand);
        let expanded = state.layout(&items, Some(&more), ContainerConstraints::with_max_width(200.0)).unwrap();
        assert!(!expanded.plan.needs_indicator);
        assert_eq!(expanded.rows.len(), 7);
        assert!(expanded.indicator_bounds().is_none());

        assert_eq!(state.cache().stats(), (0, 3));
    }

    #[test]
    fn test_flow_state_cache_stays_bounded_while_resizing() {
        let items = tags();
        let more = Item::new(40.0, 20.0);
        let mut state = FlowState::new(FlowConfig::default());

        for step in 0..5000 {
            let width = 200.0 + 0.5 * step as f32;
            state.layout(&items, Some(&more), ContainerConstraints::with_max_width(width)).unwrap();
            assert!(state.cache().len() <= PLAN_MAX_AGE as usize + 1);
        }

        // A recently used width is still served from the cache.
        let (hits, _) = state.cache().stats();
        let last = 200.0 + 0.5 * 4999.0;
        state.layout(&items, Some(&more), ContainerConstraints::with_max_width(last)).unwrap();
        assert_eq!(state.cache().stats().0, hits + 1);

        // The first width aged out long ago.
        let misses = state.cache().stats().1;
        state.layout(&items, Some(&more), ContainerConstraints::with_max_width(200.0)).unwrap();
        assert_eq!(state.cache().stats().1, misses + 1);
    }
}
