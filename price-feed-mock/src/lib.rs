#![no_std]

multiversx_sc::imports!();

pub mod price_feed_mock_proxy;

// ============================================================
// Contract
//
// Stand-in price feed for development networks and scenario
// tests. Answers with whatever rate it was last told, at a
// fixed decimal precision chosen at deployment.
// ============================================================

#[multiversx_sc::contract]
pub trait PriceFeedMock {
    #[init]
    fn init(&self, decimals: u32, initial_answer: BigUint) {
        self.decimals().set(decimals);
        self.answer().set(&initial_answer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: updateAnswer
    // Test knob: repoint the feed at a new rate.
    // ========================================================

    #[endpoint(updateAnswer)]
    fn update_answer(&self, new_answer: BigUint) {
        self.answer().set(&new_answer);
        self.answer_updated_event(&new_answer);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(currentRate)]
    fn current_rate(&self) -> MultiValue2<BigUint, u32> {
        (self.answer().get(), self.decimals().get()).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("answerUpdated")]
    fn answer_updated_event(&self, #[indexed] new_answer: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("answer")]
    fn answer(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u32>;
}
