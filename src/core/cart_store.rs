use crate::core::settings::{CartSettings, CorruptCartPolicy};
use crate::core::{Cart, NotificationSink, PersistenceStore, ProductId, ProductService, StockService};
use crate::domain::model::{Product, Stock, UpdateProductAmount};
use crate::utils::error::{CartError, ErrorKind, Result};

/// Cart state with stock-validated mutations.
///
/// Every mutation computes the next cart from the current one, writes it to
/// the persistence store and only then replaces the in-memory cart. A failed
/// lookup or write leaves the cart untouched and emits one notification.
pub struct CartStore<S, P, K, N> {
    stock: S,
    products: P,
    storage: K,
    notifier: N,
    settings: CartSettings,
    cart: Cart,
}

impl<S, P, K, N> CartStore<S, P, K, N>
where
    S: StockService,
    P: ProductService,
    K: PersistenceStore,
    N: NotificationSink,
{
    /// Loads the persisted cart and builds the store around it.
    pub async fn open(
        stock: S,
        products: P,
        storage: K,
        notifier: N,
        settings: CartSettings,
    ) -> Result<Self> {
        let cart = load_cart(&storage, &settings).await?;
        tracing::debug!(
            "Opened cart '{}' with {} line items",
            settings.storage_key,
            cart.len()
        );

        Ok(Self {
            stock,
            products,
            storage,
            notifier,
            settings,
            cart,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub async fn add_product(&mut self, product_id: ProductId) -> Result<()> {
        let outcome = match self.plan_add(product_id).await {
            Ok(next) => self.commit(next).await,
            Err(e) => Err(e),
        };
        if outcome.is_ok() {
            tracing::info!(
                "Added product {} (amount now {})",
                product_id,
                self.cart.amount_of(product_id)
            );
        }
        self.settle(outcome, &self.settings.messages.add_failed)
    }

    pub async fn remove_product(&mut self, product_id: ProductId) -> Result<()> {
        let outcome = match self.cart.without(product_id) {
            Some(next) => self.commit(next).await,
            None => Err(CartError::ItemNotFound { product_id }),
        };
        if outcome.is_ok() {
            tracing::info!("Removed product {}", product_id);
        }
        self.settle(outcome, &self.settings.messages.remove_failed)
    }

    pub async fn update_product_amount(&mut self, update: UpdateProductAmount) -> Result<()> {
        let outcome = match self.plan_update(update).await {
            Ok(Some(next)) => {
                let committed = self.commit(next).await;
                if committed.is_ok() {
                    tracing::info!(
                        "Set product {} amount to {}",
                        update.product_id,
                        update.amount
                    );
                }
                committed
            }
            Ok(None) => {
                tracing::debug!(
                    "Ignoring non-positive amount {} for product {}",
                    update.amount,
                    update.product_id
                );
                Ok(())
            }
            Err(e) => Err(e),
        };
        self.settle(outcome, &self.settings.messages.update_failed)
    }

    async fn plan_add(&self, product_id: ProductId) -> Result<Cart> {
        let stock = self.fetch_stock(product_id).await?;

        if let Some(existing) = self.cart.find(product_id) {
            let requested = existing.amount.checked_add(1).ok_or(CartError::StockUnavailable {
                product_id,
                requested: i64::MAX,
                available: stock.amount,
            })?;
            if requested > stock.amount {
                return Err(CartError::StockUnavailable {
                    product_id,
                    requested,
                    available: stock.amount,
                });
            }
            return self
                .cart
                .with_amount(product_id, requested)
                .ok_or(CartError::ItemNotFound { product_id });
        }

        if stock.amount < 1 {
            return Err(CartError::StockUnavailable {
                product_id,
                requested: 1,
                available: stock.amount,
            });
        }

        tracing::debug!("Fetching details for product {}", product_id);
        let details = self.products.product(product_id).await?;
        if details.id != product_id {
            return Err(CartError::ProductMismatch {
                requested: product_id,
                returned: details.id,
            });
        }
        Ok(self.cart.with_item(Product::from_details(details, 1)))
    }

    /// `Ok(None)` means the request is a silent no-op.
    async fn plan_update(&self, update: UpdateProductAmount) -> Result<Option<Cart>> {
        let UpdateProductAmount { product_id, amount } = update;

        if !self.cart.contains(product_id) {
            return Err(CartError::ItemNotFound { product_id });
        }
        if amount <= 0 {
            return Ok(None);
        }

        let stock = self.fetch_stock(product_id).await?;
        if amount > stock.amount {
            return Err(CartError::StockUnavailable {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        Ok(self.cart.with_amount(product_id, amount))
    }

    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock> {
        tracing::debug!("Checking stock for product {}", product_id);
        let stock = self.stock.stock(product_id).await?;
        tracing::debug!("Product {} has {} in stock", product_id, stock.amount);
        Ok(stock)
    }

    async fn commit(&mut self, next: Cart) -> Result<()> {
        let raw = serde_json::to_string(&next)?;
        self.storage.set(&self.settings.storage_key, &raw).await?;
        self.cart = next;
        Ok(())
    }

    fn settle(&self, outcome: Result<()>, failure_message: &str) -> Result<()> {
        if let Err(e) = &outcome {
            match e.kind() {
                ErrorKind::StockUnavailable => {
                    tracing::warn!("{}", e);
                    self.notifier.error(&self.settings.messages.out_of_stock);
                }
                _ => {
                    tracing::warn!("Cart operation failed: {}", e);
                    self.notifier.error(failure_message);
                }
            }
        }
        outcome
    }
}

async fn load_cart<K: PersistenceStore>(storage: &K, settings: &CartSettings) -> Result<Cart> {
    let key = settings.storage_key.as_str();
    let raw = match storage.get(key).await? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(Cart::new()),
    };

    let decoded = serde_json::from_str::<Cart>(&raw)
        .map_err(|e| e.to_string())
        .and_then(|cart| cart.check_invariants().map(|_| cart));

    match decoded {
        Ok(cart) => Ok(cart),
        Err(reason) => match settings.on_corrupt {
            CorruptCartPolicy::Reset => {
                tracing::warn!("Discarding unreadable cart under '{}': {}", key, reason);
                Ok(Cart::new())
            }
            CorruptCartPolicy::Fail => Err(CartError::CorruptCart {
                key: key.to_string(),
                reason,
            }),
        },
    }
}
