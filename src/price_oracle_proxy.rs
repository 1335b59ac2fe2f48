use multiversx_sc::proxy_imports::*;

pub struct PriceOracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PriceOracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PriceOracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PriceOracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct PriceOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> PriceOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn current_rate(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, u32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("currentRate")
            .original_result()
    }
}
