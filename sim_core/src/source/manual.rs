//! ManualSource - Free-form bonuses typed in by the user

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::StatMap;

pub struct ManualSource<'a> {
    pub bonuses: &'a StatMap,
}

impl<'a> ManualSource<'a> {
    pub fn new(bonuses: &'a StatMap) -> Self {
        ManualSource { bonuses }
    }
}

impl StatSource for ManualSource<'_> {
    fn id(&self) -> &str {
        "manual"
    }

    fn priority(&self) -> i32 {
        200 // Always last
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_all(self.bonuses);
    }
}
