use crate::countback::Countback;

/// A standings row that can be ranked: drivers and teams.
pub trait Ranked {
    fn total(&self) -> u32;

    fn total_with_drop_week(&self) -> u32;

    fn countback(&self) -> &Countback;

    /// The primary ranking key for the given drop-week setting.
    fn ranking_total(&self, drop_week: bool) -> u32 {
        if drop_week {
            self.total_with_drop_week()
        } else {
            self.total()
        }
    }
}

/// Order rows best first.
///
/// Two stable passes: countback first, then points. The second pass keeps
/// the countback order among rows level on points, and rows level on both
/// keep their incoming order.
pub fn sort_standings<T: Ranked>(rows: &mut [T], drop_week: bool) {
    rows.sort_by(|a, b| b.countback().rank_cmp(a.countback()));
    rows.sort_by(|a, b| b.ranking_total(drop_week).cmp(&a.ranking_total(drop_week)));
}
