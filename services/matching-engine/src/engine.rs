//! Matching engine core
//!
//! Owns orders, trades, and positions for all markets and applies the
//! post/cancel/fill operations as atomic state transitions. Matching runs
//! once per posted order: crossing resting orders are ranked by price-time
//! priority and consumed until the taker is filled or candidates run out.

use std::collections::BTreeMap;

use types::ids::{AccountId, MarketId, OrderId, Sequence, TradeId};
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderStatus, Side};
use types::position::{Position, PositionKey};
use types::trade::Trade;
use types::traits::MarketLookup;

use crate::errors::PredictionError;
use crate::events::{
    MarketCreated, OrderCancelled, OrderPosted, PredictionEvent, TradeExecuted,
};
use crate::matching;
use crate::registry::MarketRegistry;

/// Order book snapshot for one `(market, outcome)` pair, split by side
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBookSnapshot {
    pub market_id: MarketId,
    pub outcome_index: u32,
    pub bids: Vec<Order>,
    pub asks: Vec<Order>,
}

/// Order book and matching engine for all markets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchingEngine {
    pub(crate) registry: MarketRegistry,
    pub(crate) orders: BTreeMap<OrderId, Order>,
    pub(crate) trades: BTreeMap<TradeId, Trade>,
    pub(crate) positions: BTreeMap<PositionKey, Position>,
    pub(crate) order_seq: Sequence,
    pub(crate) trade_seq: Sequence,
    events: Vec<PredictionEvent>,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The market registry owned by this engine
    pub fn registry(&self) -> &MarketRegistry {
        &self.registry
    }

    /// Create a new market
    pub fn create_market(
        &mut self,
        creator: AccountId,
        question: impl Into<String>,
        outcomes: Vec<String>,
        group_id: impl Into<String>,
        deadline: i64,
        block_time: i64,
    ) -> Result<MarketId, PredictionError> {
        let question = question.into();
        let market_id = self.registry.create_market(
            creator.clone(),
            question.clone(),
            outcomes,
            group_id,
            deadline,
            block_time,
        )?;
        self.events.push(PredictionEvent::MarketCreated(MarketCreated {
            market_id,
            creator,
            question,
        }));
        Ok(market_id)
    }

    /// Post a new order and immediately attempt matching
    ///
    /// The order is stored as `Open` with zero fill, matched against the
    /// book, and persisted in its final state. Returns the new order id and
    /// the trades generated, in creation order.
    #[allow(clippy::too_many_arguments)]
    pub fn post_order(
        &mut self,
        creator: AccountId,
        market_id: MarketId,
        outcome_index: u32,
        side: Side,
        price: &str,
        amount: Quantity,
        block_time: i64,
    ) -> Result<(OrderId, Vec<Trade>), PredictionError> {
        let market = self
            .registry
            .get(market_id)
            .ok_or(PredictionError::MarketNotFound { market_id })?;
        if outcome_index as usize >= market.outcomes.len() {
            return Err(PredictionError::InvalidOutcome { outcome_index });
        }
        let price: Price = price.parse()?;
        if amount.is_zero() {
            return Err(PredictionError::InvalidAmount);
        }

        let order_id = OrderId::new(self.order_seq.next());
        let mut order = Order::new(
            order_id,
            market_id,
            outcome_index,
            creator.clone(),
            side,
            price,
            amount,
            block_time,
        );
        self.orders.insert(order_id, order.clone());
        self.events.push(PredictionEvent::OrderPosted(OrderPosted {
            order_id,
            market_id,
            outcome_index,
            creator,
            side,
        }));

        let trades = self.match_order(&mut order, block_time);
        self.orders.insert(order_id, order);

        Ok((order_id, trades))
    }

    /// Cancel an order
    ///
    /// Only the creator can cancel, and only while the order is non-terminal.
    /// Any unfilled remainder is released back to the creator by the owning
    /// escrow module; this engine only flips state.
    pub fn cancel_order(
        &mut self,
        order_id: OrderId,
        requester: &AccountId,
    ) -> Result<(), PredictionError> {
        let order = self
            .orders
            .get(&order_id)
            .ok_or(PredictionError::OrderNotFound { order_id })?;
        if &order.creator != requester {
            return Err(PredictionError::Unauthorized { order_id });
        }
        if order.status.is_terminal() {
            return Err(PredictionError::OrderNotCancellable {
                status: order.status,
            });
        }

        let mut order = order.clone();
        order.cancel();
        let creator = order.creator.clone();
        self.orders.insert(order_id, order);
        self.events
            .push(PredictionEvent::OrderCancelled(OrderCancelled {
                order_id,
                creator,
            }));
        Ok(())
    }

    /// Fill an order directly, bypassing the book
    ///
    /// Produces exactly one trade at the order's posted price with `filler`
    /// as the counterparty on the opposite side.
    pub fn fill_order(
        &mut self,
        order_id: OrderId,
        filler: AccountId,
        amount: Quantity,
        block_time: i64,
    ) -> Result<Vec<Trade>, PredictionError> {
        let order = self
            .orders
            .get(&order_id)
            .ok_or(PredictionError::OrderNotFound { order_id })?
            .clone();
        if !order.status.is_fillable() {
            return Err(PredictionError::OrderNotFillable {
                status: order.status,
            });
        }
        if amount.is_zero() {
            return Err(PredictionError::InvalidAmount);
        }
        let remaining = order.remaining();
        if amount > remaining {
            return Err(PredictionError::FillExceedsRemaining {
                requested: amount,
                remaining,
            });
        }

        let (buyer, seller) = match order.side {
            Side::Sell => (filler, order.creator.clone()),
            Side::Buy => (order.creator.clone(), filler),
        };
        let trade = Trade::new(
            TradeId::new(self.trade_seq.next()),
            order.market_id,
            order.outcome_index,
            buyer,
            seller,
            order.price,
            amount,
            block_time,
        );
        self.apply_trade(&trade);

        let mut order = order;
        order.add_fill(amount);
        self.orders.insert(order_id, order);

        Ok(vec![trade])
    }

    /// Match a freshly posted taker order against the book
    ///
    /// Only `Open` resting orders on the opposite side of the same
    /// `(market, outcome)` book are candidates. Each match trades at the
    /// resting order's price, so price improvement accrues to the taker.
    fn match_order(&mut self, taker: &mut Order, block_time: i64) -> Vec<Trade> {
        let mut candidates: Vec<Order> = self
            .orders
            .values()
            .filter(|o| {
                o.market_id == taker.market_id
                    && o.outcome_index == taker.outcome_index
                    && o.status == OrderStatus::Open
                    && o.side != taker.side
                    && matching::crosses(taker.side, taker.price, o.price)
            })
            .cloned()
            .collect();
        matching::sort_candidates(taker.side, &mut candidates);

        let mut trades = Vec::new();
        let mut remaining = taker.remaining();
        for candidate in candidates {
            if remaining.is_zero() {
                break;
            }
            // Re-read live state: an earlier iteration may have consumed it
            let Some(resting) = self.orders.get(&candidate.id) else {
                continue;
            };
            if resting.status != OrderStatus::Open {
                continue;
            }
            let mut resting = resting.clone();
            let available = resting.remaining();
            let fill = remaining.min(available);
            if fill.is_zero() {
                continue;
            }

            let (buyer, seller) = matching::resolve_parties(taker, &resting);
            let trade = Trade::new(
                TradeId::new(self.trade_seq.next()),
                taker.market_id,
                taker.outcome_index,
                buyer.clone(),
                seller.clone(),
                resting.price,
                fill,
                block_time,
            );
            self.apply_trade(&trade);
            trades.push(trade);

            resting.add_fill(fill);
            self.orders.insert(resting.id, resting);

            taker.add_fill(fill);
            remaining = taker.remaining();
        }

        trades
    }

    /// Record a trade and credit the buyer's position
    fn apply_trade(&mut self, trade: &Trade) {
        self.trades.insert(trade.trade_id, trade.clone());
        self.add_to_position(
            trade.market_id,
            trade.buyer.clone(),
            trade.outcome_index,
            trade.amount,
        );
        self.events
            .push(PredictionEvent::TradeExecuted(TradeExecuted {
                trade_id: trade.trade_id,
                market_id: trade.market_id,
                outcome_index: trade.outcome_index,
                buyer: trade.buyer.clone(),
                seller: trade.seller.clone(),
                price: trade.price,
                amount: trade.amount,
            }));
    }

    /// Add to an owner's position, creating it on first contribution
    fn add_to_position(
        &mut self,
        market_id: MarketId,
        owner: AccountId,
        outcome_index: u32,
        amount: Quantity,
    ) {
        let key = PositionKey {
            market_id,
            owner: owner.clone(),
            outcome_index,
        };
        match self.positions.get_mut(&key) {
            Some(position) => position.add(amount),
            None => {
                self.positions.insert(
                    key,
                    Position::new(market_id, owner, outcome_index, amount, true),
                );
            }
        }
    }

    // ---- read queries -------------------------------------------------

    /// Fetch a single order
    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    /// All orders in id order
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Live (open or partially filled) orders for one `(market, outcome)` book
    pub fn open_orders(&self, market_id: MarketId, outcome_index: u32) -> Vec<Order> {
        self.orders
            .values()
            .filter(|o| {
                o.market_id == market_id
                    && o.outcome_index == outcome_index
                    && o.status.is_fillable()
            })
            .cloned()
            .collect()
    }

    /// Order book snapshot split into bid and ask lists
    pub fn order_book(&self, market_id: MarketId, outcome_index: u32) -> OrderBookSnapshot {
        let mut bids = Vec::new();
        let mut asks = Vec::new();
        for order in self.open_orders(market_id, outcome_index) {
            match order.side {
                Side::Buy => bids.push(order),
                Side::Sell => asks.push(order),
            }
        }
        OrderBookSnapshot {
            market_id,
            outcome_index,
            bids,
            asks,
        }
    }

    /// All orders created by one account
    pub fn user_orders(&self, account: &AccountId) -> Vec<Order> {
        self.orders
            .values()
            .filter(|o| &o.creator == account)
            .cloned()
            .collect()
    }

    /// All trades in a market, in trade-id order
    pub fn market_trades(&self, market_id: MarketId) -> Vec<Trade> {
        self.trades
            .values()
            .filter(|t| t.market_id == market_id)
            .cloned()
            .collect()
    }

    /// Fetch a position
    pub fn position(
        &self,
        market_id: MarketId,
        owner: &AccountId,
        outcome_index: u32,
    ) -> Option<&Position> {
        self.positions.get(&PositionKey {
            market_id,
            owner: owner.clone(),
            outcome_index,
        })
    }

    /// Buffered events
    pub fn events(&self) -> &[PredictionEvent] {
        &self.events
    }

    /// Drain buffered events
    pub fn drain_events(&mut self) -> Vec<PredictionEvent> {
        std::mem::take(&mut self.events)
    }
}

impl MarketLookup for MatchingEngine {
    fn market(&self, market_id: MarketId) -> Option<types::market::PredictionMarket> {
        self.registry.market(market_id)
    }
}
