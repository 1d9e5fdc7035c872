use crate::*;

#[near]
impl Contract {
    pub fn total_supply(&self) -> u64 {
        self.designs_by_id.len() as u64
    }

    pub fn designs(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<DesignView> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.designs_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, design)| DesignView::from_design(*token_id, design))
            .collect()
    }

    pub fn supply_for_owner(&self, account_id: AccountId) -> u64 {
        self.designs_per_owner
            .get(&account_id)
            .map(|owned| owned.len() as u64)
            .unwrap_or(0)
    }

    pub fn designs_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<DesignView> {
        let Some(owned) = self.designs_per_owner.get(&account_id) else {
            return vec![];
        };

        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;

        owned
            .iter()
            .skip(start)
            .filter_map(|token_id| {
                self.designs_by_id
                    .get(token_id)
                    .map(|design| DesignView::from_design(*token_id, design))
            })
            .take(limit)
            .collect()
    }
}
