use cucumber::World;
use receipt_matching_engine::{
    events::EventProducers,
    Match,
    MatchError,
    MatchingApi,
    MemoryStore,
    VendorList,
};

#[derive(Default, Debug, World)]
pub struct MatchingWorld {
    pub api: Option<MatchingApi<MemoryStore>>,
    /// The outcome of the most recent submission
    pub last_result: Option<Result<Option<Match>, MatchError>>,
    /// Every match produced in this scenario, in order
    pub matches: Vec<Match>,
    pub vendors: VendorList,
    pub classified: Option<String>,
}

impl MatchingWorld {
    pub fn api(&self) -> &MatchingApi<MemoryStore> {
        self.api.as_ref().expect("MatchingApi not initialised")
    }

    pub fn new_engine(&mut self) {
        self.api = Some(MatchingApi::new(MemoryStore::new(), EventProducers::default()));
        self.last_result = None;
        self.matches.clear();
    }

    pub fn record(&mut self, result: Result<Option<Match>, MatchError>) {
        if let Ok(Some(m)) = &result {
            self.matches.push(m.clone());
        }
        self.last_result = Some(result);
    }
}
