use multiversx_sc_scenario::imports::*;

use price_feed_mock::price_feed_mock_proxy;

const OWNER: TestAddress = TestAddress::new("owner");
const ORACLE_ADDRESS: TestSCAddress = TestSCAddress::new("price-feed");
const ORACLE_CODE: MxscPath = MxscPath::new("output/price-feed-mock.mxsc.json");

const RATE_DECIMALS: u32 = 8;
const INITIAL_RATE: u64 = 200_000_000_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(ORACLE_CODE, price_feed_mock::ContractBuilder);
    blockchain
}

fn setup() -> ScenarioWorld {
    let mut world = world();

    world.account(OWNER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(price_feed_mock_proxy::PriceFeedMockProxy)
        .init(RATE_DECIMALS, INITIAL_RATE)
        .code(ORACLE_CODE)
        .new_address(ORACLE_ADDRESS)
        .run();

    world
}

#[test]
fn serves_the_initial_answer() {
    let mut world = setup();

    let (rate, decimals) = world
        .query()
        .to(ORACLE_ADDRESS)
        .typed(price_feed_mock_proxy::PriceFeedMockProxy)
        .current_rate()
        .returns(ReturnsResult)
        .run()
        .into_tuple();

    assert_eq!(rate, BigUint::from(INITIAL_RATE));
    assert_eq!(decimals, RATE_DECIMALS);
}

#[test]
fn update_answer_replaces_the_rate_but_not_the_precision() {
    let mut world = setup();

    world
        .tx()
        .from(OWNER)
        .to(ORACLE_ADDRESS)
        .typed(price_feed_mock_proxy::PriceFeedMockProxy)
        .update_answer(INITIAL_RATE / 2)
        .run();

    let (rate, decimals) = world
        .query()
        .to(ORACLE_ADDRESS)
        .typed(price_feed_mock_proxy::PriceFeedMockProxy)
        .current_rate()
        .returns(ReturnsResult)
        .run()
        .into_tuple();

    assert_eq!(rate, BigUint::from(INITIAL_RATE / 2));
    assert_eq!(decimals, RATE_DECIMALS);
}
