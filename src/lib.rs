#![no_std]

multiversx_sc::imports!();

pub mod fund_ledger_proxy;
pub mod price_oracle_proxy;

// ============================================================
// Constants
// ============================================================

/// Minimum accepted contribution, in whole USD
const MINIMUM_USD: u64 = 50;

/// USD values carry 18 decimals, same scale as the native token
const USD_DECIMALS: u32 = 18;

/// Oracle answers with more precision than the USD scale are rejected
const MAX_ORACLE_DECIMALS: u32 = 18;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, price_feed_address: ManagedAddress) {
        let owner = self.blockchain().get_caller();
        self.owner().set(&owner);
        self.price_feed_address().set(&price_feed_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Accepts EGLD, converts it to USD through the price feed
    // and records the caller once the minimum value is met.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        let usd_value = self.usd_value(&payment_amount);
        require!(
            usd_value >= self.minimum_usd_value(),
            "Contribution below minimum USD value"
        );

        // First accepted contribution registers the funder; repeat
        // contributions only grow the recorded amount.
        if self.funded_amount(&caller).get() == 0u64 {
            self.funders().push(&caller);
        }
        self.funded_amount(&caller).update(|a| *a += &payment_amount);

        self.contribution_event(&caller, &payment_amount, &usd_value);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Owner-only. Resets every funder entry straight from
    // storage, sends the full balance to the owner, then
    // empties the funders list.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), "Caller is not the owner");

        let funder_count = self.funders().len();
        for i in 1..=funder_count {
            let funder = self.funders().get(i);
            self.funded_amount(&funder).clear();
        }
        self.funders().clear();

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        self.send().direct_egld(&caller, &balance);

        self.withdrawal_event(&caller, &balance);
    }

    // ========================================================
    // ENDPOINT: withdrawOptimized
    // Same observable effect as withdraw. Snapshots the funders
    // list into working memory first so the reset loop works
    // off the local copy instead of re-reading the list.
    // ========================================================

    #[endpoint(withdrawOptimized)]
    fn withdraw_optimized(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), "Caller is not the owner");

        let funders: ManagedVec<ManagedAddress> = self.funders().iter().collect();
        for funder in funders.iter() {
            self.funded_amount(&funder).clear();
        }
        self.funders().clear();

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        self.send().direct_egld(&caller, &balance);

        self.withdrawal_event(&caller, &balance);
    }

    // ========================================================
    // INTERNAL: price conversion
    // The rate is read fresh on every call and the read belongs
    // to the same atomic unit as the rest of the contribution.
    // ========================================================

    fn usd_value(&self, amount: &BigUint) -> BigUint {
        let (rate, decimals) = self.read_oracle_rate().into_tuple();
        require!(
            decimals <= MAX_ORACLE_DECIMALS,
            "Unsupported oracle precision"
        );
        // Truncating division: no rounding-up leniency at the threshold
        amount * &rate / BigUint::from(10u64.pow(decimals))
    }

    fn read_oracle_rate(&self) -> MultiValue2<BigUint, u32> {
        let price_feed = self.price_feed_address().get();
        self.tx()
            .to(&price_feed)
            .typed(price_oracle_proxy::PriceOracleProxy)
            .current_rate()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn minimum_usd_value(&self) -> BigUint {
        BigUint::from(MINIMUM_USD) * BigUint::from(10u64.pow(USD_DECIMALS))
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getPriceFeed)]
    fn get_price_feed(&self) -> ManagedAddress {
        self.price_feed_address().get()
    }

    #[view(getAddressToAmountFunded)]
    fn get_address_to_amount_funded(&self, account: ManagedAddress) -> BigUint {
        self.funded_amount(&account).get()
    }

    #[view(getFunder)]
    fn get_funder(&self, index: usize) -> ManagedAddress {
        require!(index < self.funders().len(), "Funder index out of range");
        self.funders().get(index + 1)
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getFundersCount)]
    fn get_funders_count(&self) -> usize {
        self.funders().len()
    }

    #[view(getMinimumUsd)]
    fn get_minimum_usd(&self) -> BigUint {
        self.minimum_usd_value()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] funder: &ManagedAddress,
        #[indexed] amount: &BigUint,
        usd_value: &BigUint,
    );

    #[event("withdrawal")]
    fn withdrawal_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("priceFeedAddress")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Ledger state ──

    #[storage_mapper("fundedAmount")]
    fn funded_amount(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}
