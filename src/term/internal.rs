use crate::term::{HpoGroup, HpoTermId};
use crate::{HpoResult, DEFAULT_NUM_PARENTS};

/// The owned representation of a term inside the [`crate::Ontology`]
#[derive(Debug, Clone)]
pub(crate) struct HpoTermInternal {
    id: HpoTermId,
    name: String,
    parents: HpoGroup,
    children: HpoGroup,
    obsolete: bool,
}

impl HpoTermInternal {
    pub fn new(name: String, id: HpoTermId) -> HpoTermInternal {
        HpoTermInternal {
            id,
            name,
            parents: HpoGroup::with_capacity(DEFAULT_NUM_PARENTS),
            children: HpoGroup::with_capacity(DEFAULT_NUM_PARENTS),
            obsolete: false,
        }
    }

    pub fn try_new(id: &str, name: &str) -> HpoResult<HpoTermInternal> {
        let id = HpoTermId::try_from(id)?;
        Ok(HpoTermInternal::new(name.to_string(), id))
    }

    pub fn id(&self) -> &HpoTermId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parents(&self) -> &HpoGroup {
        &self.parents
    }

    pub fn children(&self) -> &HpoGroup {
        &self.children
    }

    pub fn add_parent(&mut self, parent_id: HpoTermId) {
        self.parents.insert(parent_id);
    }

    pub fn add_child(&mut self, child_id: HpoTermId) {
        self.children.insert(child_id);
    }

    pub fn obsolete(&self) -> bool {
        self.obsolete
    }

    pub fn obsolete_mut(&mut self) -> &mut bool {
        &mut self.obsolete
    }
}

impl PartialEq for HpoTermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HpoTermInternal {}
