use cucumber::given;
use receipt_matching_engine::VendorList;

use crate::cucumber::MatchingWorld;

#[given("a fresh engine")]
async fn fresh_engine(world: &mut MatchingWorld) {
    world.new_engine();
}

#[given(expr = "the vendor list {string}")]
async fn vendor_list(world: &mut MatchingWorld, vendors: String) {
    world.vendors = VendorList::from_csv(&vendors);
}
