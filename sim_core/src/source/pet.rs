//! PetSource - Flat bonuses from a companion pet

use crate::catalog::PetDefinition;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

pub struct PetSource<'a> {
    pub pet: &'a PetDefinition,
}

impl<'a> PetSource<'a> {
    pub fn new(pet: &'a PetDefinition) -> Self {
        PetSource { pet }
    }
}

impl StatSource for PetSource<'_> {
    fn id(&self) -> &str {
        &self.pet.id
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_all(&self.pet.bonuses);
    }
}
