//! Cascading province > regency > district > village selection.
//!
//! Selecting at one level wipes every level below it and asks for the next
//! level's options. Fetching is split in two halves so the caller decides when
//! the network call happens: [`RegionSelectorChain::select`] hands out a
//! [`FetchRequest`] and [`RegionSelectorChain::resolve`] takes its result back.
//! Each level remembers the token of its newest request; results carrying any
//! other token are dropped, so a slow answer for an old parent can never
//! overwrite the list of the current one.

use crate::core::error::Result;
use crate::features::regions::models::{RegionLevel, RegionOption};
use crate::features::regions::services::RegionSource;

/// Options of `level` requested under `parent_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub level: RegionLevel,
    pub parent_id: Option<String>,
    pub token: u64,
}

impl FetchRequest {
    pub async fn run(&self, source: &dyn RegionSource) -> Result<Vec<RegionOption>> {
        source
            .fetch_options(self.level, self.parent_id.as_deref())
            .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced with this many options
    Applied(usize),
    /// The fetch failed; the list is left empty
    Failed,
    /// A newer request or a clear superseded this one
    Discarded,
}

/// A full or partial province > village path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionPath {
    pub province: Option<String>,
    pub regency: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
}

impl RegionPath {
    pub fn new(province: &str, regency: &str, district: &str, village: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            province: non_empty(province),
            regency: non_empty(regency),
            district: non_empty(district),
            village: non_empty(village),
        }
    }

    pub fn get(&self, level: RegionLevel) -> Option<&str> {
        match level {
            RegionLevel::Province => self.province.as_deref(),
            RegionLevel::Regency => self.regency.as_deref(),
            RegionLevel::District => self.district.as_deref(),
            RegionLevel::Village => self.village.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct LevelState {
    selected: Option<String>,
    options: Vec<RegionOption>,
    /// Token of the newest request for this level's options
    token: u64,
    loading: bool,
}

impl LevelState {
    fn invalidate(&mut self) {
        self.selected = None;
        self.options.clear();
        self.token += 1;
        self.loading = false;
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegionSelectorChain {
    levels: [LevelState; 4],
}

impl RegionSelectorChain {
    pub fn new() -> Self {
        Self::default()
    }

    fn level(&self, level: RegionLevel) -> &LevelState {
        &self.levels[level.index()]
    }

    fn level_mut(&mut self, level: RegionLevel) -> &mut LevelState {
        &mut self.levels[level.index()]
    }

    pub fn selected(&self, level: RegionLevel) -> Option<&str> {
        self.level(level).selected.as_deref()
    }

    pub fn options(&self, level: RegionLevel) -> &[RegionOption] {
        &self.level(level).options
    }

    pub fn is_loading(&self, level: RegionLevel) -> bool {
        self.level(level).loading
    }

    /// Current token of `level`, the one a result must carry to be applied
    pub fn token(&self, level: RegionLevel) -> u64 {
        self.level(level).token
    }

    pub fn path(&self) -> RegionPath {
        let owned = |level| self.selected(level).map(str::to_string);
        RegionPath {
            province: owned(RegionLevel::Province),
            regency: owned(RegionLevel::Regency),
            district: owned(RegionLevel::District),
            village: owned(RegionLevel::Village),
        }
    }

    fn issue(&mut self, level: RegionLevel, parent_id: Option<String>) -> FetchRequest {
        let state = self.level_mut(level);
        state.token += 1;
        state.loading = true;
        FetchRequest {
            level,
            parent_id,
            token: state.token,
        }
    }

    /// Request a fresh province list, dropping whatever was there
    pub fn load_provinces(&mut self) -> FetchRequest {
        self.level_mut(RegionLevel::Province).options.clear();
        self.issue(RegionLevel::Province, None)
    }

    /// Select `id` at `level`.
    ///
    /// Every level below is cleared, and any request still in flight for them
    /// is superseded. Returns the request for the next level's options when the
    /// id is non-empty and a next level exists.
    pub fn select(&mut self, level: RegionLevel, id: impl Into<String>) -> Option<FetchRequest> {
        let id = id.into();
        let selected = (!id.is_empty()).then_some(id);
        self.level_mut(level).selected = selected.clone();

        for below in level.descendants() {
            self.level_mut(below).invalidate();
        }

        match (selected, level.child()) {
            (Some(parent_id), Some(child)) => Some(self.issue(child, Some(parent_id))),
            _ => None,
        }
    }

    /// Clear the selection at `level` and everything below it. Idempotent.
    pub fn clear(&mut self, level: RegionLevel) {
        self.level_mut(level).selected = None;
        for below in level.descendants() {
            self.level_mut(below).invalidate();
        }
    }

    /// Drop every selection and list, provinces included
    pub fn reset(&mut self) {
        for state in self.levels.iter_mut() {
            state.invalidate();
        }
    }

    /// Apply the result of `request` if it is still the newest for its level
    pub fn resolve(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<RegionOption>>,
    ) -> FetchOutcome {
        let state = self.level_mut(request.level);
        if state.token != request.token {
            tracing::debug!(
                "Discarding stale {} options for parent {:?} (token {} != {})",
                request.level,
                request.parent_id,
                request.token,
                state.token
            );
            return FetchOutcome::Discarded;
        }

        state.loading = false;
        match result {
            Ok(options) => {
                let count = options.len();
                state.options = options;
                FetchOutcome::Applied(count)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch {} options for parent {:?}: {}",
                    request.level,
                    request.parent_id,
                    e
                );
                state.options.clear();
                FetchOutcome::Failed
            }
        }
    }

    pub async fn refresh_provinces(&mut self, source: &dyn RegionSource) -> FetchOutcome {
        let request = self.load_provinces();
        let result = request.run(source).await;
        self.resolve(&request, result)
    }

    /// [`select`](Self::select) and wait for the next level's options
    pub async fn select_and_load(
        &mut self,
        source: &dyn RegionSource,
        level: RegionLevel,
        id: impl Into<String>,
    ) -> Option<FetchOutcome> {
        let request = self.select(level, id)?;
        let result = request.run(source).await;
        Some(self.resolve(&request, result))
    }

    /// Walk an existing path top-down, one level at a time.
    ///
    /// Each fetch needs the previous level's id, so the calls are strictly
    /// sequential. A failed fetch leaves that list empty but the walk goes on;
    /// the walk stops at the first missing id.
    pub async fn prime(&mut self, source: &dyn RegionSource, path: &RegionPath) {
        for level in RegionLevel::ALL {
            let Some(id) = path.get(level) else {
                break;
            };
            self.select_and_load(source, level, id).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::FakeRegionSource;

    fn opts(pairs: &[(&str, &str)]) -> Vec<RegionOption> {
        pairs
            .iter()
            .map(|(id, name)| RegionOption::new(*id, *name))
            .collect()
    }

    fn primed_chain() -> RegionSelectorChain {
        let mut chain = RegionSelectorChain::new();
        let req = chain.select(RegionLevel::Province, "32").unwrap();
        chain.resolve(&req, Ok(opts(&[("3273", "KOTA BANDUNG")])));
        let req = chain.select(RegionLevel::Regency, "3273").unwrap();
        chain.resolve(&req, Ok(opts(&[("3273010", "SUKASARI")])));
        let req = chain.select(RegionLevel::District, "3273010").unwrap();
        chain.resolve(&req, Ok(opts(&[("3273010001", "SARIJADI")])));
        assert!(chain.select(RegionLevel::Village, "3273010001").is_none());
        chain
    }

    #[test]
    fn test_select_issues_child_request() {
        let mut chain = RegionSelectorChain::new();
        let request = chain.select(RegionLevel::Province, "32").unwrap();

        assert_eq!(request.level, RegionLevel::Regency);
        assert_eq!(request.parent_id.as_deref(), Some("32"));
        assert_eq!(request.token, chain.token(RegionLevel::Regency));
        assert!(chain.is_loading(RegionLevel::Regency));
        assert!(!chain.is_loading(RegionLevel::District));
    }

    #[test]
    fn test_empty_selection_issues_nothing() {
        let mut chain = primed_chain();
        assert!(chain.select(RegionLevel::Province, "").is_none());
        assert_eq!(chain.selected(RegionLevel::Province), None);
        assert_eq!(chain.path(), RegionPath::default());
    }

    #[test]
    fn test_clear_wipes_descendants_at_every_level() {
        for level in RegionLevel::ALL {
            let mut chain = primed_chain();
            let options_before = chain.options(level).to_vec();

            chain.clear(level);
            let after_first = chain.path();
            chain.clear(level);

            assert_eq!(chain.path(), after_first, "clear is not idempotent");
            assert_eq!(chain.selected(level), None);
            // the cleared level keeps its own list, it is keyed by the parent
            assert_eq!(chain.options(level), options_before.as_slice());
            for above in RegionLevel::ALL.iter().filter(|l| **l < level) {
                assert!(chain.selected(*above).is_some());
            }
            for below in level.descendants() {
                assert_eq!(chain.selected(below), None);
                assert!(chain.options(below).is_empty());
            }
        }
    }

    #[test]
    fn test_reselecting_parent_clears_children() {
        let mut chain = primed_chain();
        let request = chain.select(RegionLevel::Regency, "3204").unwrap();

        assert_eq!(chain.selected(RegionLevel::Province), Some("32"));
        assert_eq!(chain.selected(RegionLevel::Regency), Some("3204"));
        assert_eq!(chain.selected(RegionLevel::District), None);
        assert_eq!(chain.selected(RegionLevel::Village), None);
        assert!(chain.options(RegionLevel::District).is_empty());
        assert!(chain.options(RegionLevel::Village).is_empty());
        assert_eq!(request.parent_id.as_deref(), Some("3204"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut chain = RegionSelectorChain::new();
        let p1 = chain.select(RegionLevel::Province, "P1").unwrap();
        let p2 = chain.select(RegionLevel::Province, "P2").unwrap();
        assert!(p2.token > p1.token);

        // P2 answers first, then the slow P1 answer arrives
        let applied = chain.resolve(&p2, Ok(opts(&[("R2", "REGENCY OF P2")])));
        let stale = chain.resolve(&p1, Ok(opts(&[("R1", "REGENCY OF P1")])));

        assert_eq!(applied, FetchOutcome::Applied(1));
        assert_eq!(stale, FetchOutcome::Discarded);
        assert_eq!(chain.options(RegionLevel::Regency), opts(&[("R2", "REGENCY OF P2")]).as_slice());
    }

    #[test]
    fn test_stale_response_arriving_before_current_is_discarded() {
        let mut chain = RegionSelectorChain::new();
        let p1 = chain.select(RegionLevel::Province, "P1").unwrap();
        let p2 = chain.select(RegionLevel::Province, "P2").unwrap();

        assert_eq!(
            chain.resolve(&p1, Ok(opts(&[("R1", "REGENCY OF P1")]))),
            FetchOutcome::Discarded
        );
        assert!(chain.options(RegionLevel::Regency).is_empty());
        assert!(chain.is_loading(RegionLevel::Regency));

        chain.resolve(&p2, Ok(opts(&[("R2", "REGENCY OF P2")])));
        assert_eq!(chain.options(RegionLevel::Regency)[0].id, "R2");
        assert!(!chain.is_loading(RegionLevel::Regency));
    }

    #[test]
    fn test_response_after_clear_is_discarded() {
        let mut chain = RegionSelectorChain::new();
        let request = chain.select(RegionLevel::Province, "32").unwrap();
        chain.clear(RegionLevel::Province);

        let outcome = chain.resolve(&request, Ok(opts(&[("3273", "KOTA BANDUNG")])));
        assert_eq!(outcome, FetchOutcome::Discarded);
        assert!(chain.options(RegionLevel::Regency).is_empty());
    }

    #[test]
    fn test_failed_fetch_leaves_list_empty() {
        let mut chain = RegionSelectorChain::new();
        let request = chain.select(RegionLevel::Province, "32").unwrap();
        let outcome = chain.resolve(
            &request,
            Err(AppError::ExternalServiceError("timeout".to_string())),
        );

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(chain.options(RegionLevel::Regency).is_empty());
        assert!(!chain.is_loading(RegionLevel::Regency));
        assert_eq!(chain.selected(RegionLevel::Province), Some("32"));
    }

    #[test]
    fn test_reset_drops_everything() {
        let mut chain = primed_chain();
        chain.reset();
        for level in RegionLevel::ALL {
            assert_eq!(chain.selected(level), None);
            assert!(chain.options(level).is_empty());
        }
    }

    #[tokio::test]
    async fn test_prime_walks_levels_in_order() {
        let source = FakeRegionSource::bandung();
        let mut chain = RegionSelectorChain::new();
        let path = RegionPath::new("32", "3273", "3273010", "3273010001");

        chain.prime(&source, &path).await;

        assert_eq!(chain.path(), path);
        assert_eq!(chain.options(RegionLevel::Regency).len(), 2);
        assert_eq!(chain.options(RegionLevel::District).len(), 2);
        assert_eq!(chain.options(RegionLevel::Village).len(), 2);
        assert_eq!(
            source.calls(),
            vec![
                (RegionLevel::Regency, Some("32".to_string())),
                (RegionLevel::District, Some("3273".to_string())),
                (RegionLevel::Village, Some("3273010".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_prime_with_unknown_ids_keeps_selection() {
        // dummy ids: the upstream knows nothing below the province
        let source = FakeRegionSource::bandung();
        let mut chain = RegionSelectorChain::new();
        let path = RegionPath::new("32", "9999", "9999010", "9999010001");

        chain.prime(&source, &path).await;

        assert_eq!(chain.path(), path);
        assert_eq!(chain.options(RegionLevel::Regency).len(), 2);
        assert!(chain.options(RegionLevel::District).is_empty());
        assert!(chain.options(RegionLevel::Village).is_empty());
    }

    #[tokio::test]
    async fn test_province_outage_leaves_chain_empty() {
        let source = FakeRegionSource::bandung().failing(RegionLevel::Province);
        let mut chain = RegionSelectorChain::new();

        let outcome = chain.refresh_provinces(&source).await;

        assert_eq!(outcome, FetchOutcome::Failed);
        for level in RegionLevel::ALL {
            assert!(chain.options(level).is_empty());
            assert_eq!(chain.selected(level), None);
        }
    }
}
