/// Represents one synthetic customer order.
///
/// Records are created fresh every write cycle, handed to the
/// [`OrderStore`](crate::store::OrderStore) and then dropped. Nothing keeps
/// track of them afterwards, so two records may carry the same [`OrderId`].
///
/// See [`OrderRecord::to_item`] for the flat field mapping written to the table.
use crate::model::{FieldValue, Item};
use rust_decimal::Decimal;
use std::fmt::Display;

/// Text-encoded order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(pub String);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed catalogue of products an order can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductName {
    Laptop,
    Phone,
    Tablet,
    Headphones,
    Charger,
}

impl ProductName {
    /// Every product, in catalogue order.
    pub const ALL: [ProductName; 5] = [
        ProductName::Laptop,
        ProductName::Phone,
        ProductName::Tablet,
        ProductName::Headphones,
        ProductName::Charger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductName::Laptop => "Laptop",
            ProductName::Phone => "Phone",
            ProductName::Tablet => "Tablet",
            ProductName::Headphones => "Headphones",
            ProductName::Charger => "Charger",
        }
    }
}

impl Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub product_name: ProductName,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderRecord {
    /// Attribute holding the order id.
    pub const ORDER_ID: &'static str = "orderid";
    /// Attribute holding the product label.
    pub const PRODUCT_NAME: &'static str = "product_name";
    /// Attribute holding the quantity.
    pub const QUANTITY: &'static str = "quantity";
    /// Attribute holding the price.
    pub const PRICE: &'static str = "price";

    /// Creates a new OrderRecord instance.
    ///
    /// # Arguments
    /// * `order_id` - Text identifier; uniqueness is not checked
    /// * `product_name` - One of [`ProductName::ALL`]
    /// * `quantity` - Units ordered
    /// * `price` - Unit price as an exact decimal
    pub fn new(
        order_id: impl Into<OrderId>,
        product_name: ProductName,
        quantity: u32,
        price: Decimal,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            product_name,
            quantity,
            price,
        }
    }

    /// Flattens the record into the item shape the store writes.
    pub fn to_item(&self) -> Item {
        let mut item = Item::new();
        item.insert(
            Self::ORDER_ID.to_string(),
            FieldValue::Text(self.order_id.0.clone()),
        );
        item.insert(
            Self::PRODUCT_NAME.to_string(),
            FieldValue::Text(self.product_name.as_str().to_string()),
        );
        item.insert(
            Self::QUANTITY.to_string(),
            FieldValue::Integer(i64::from(self.quantity)),
        );
        item.insert(Self::PRICE.to_string(), FieldValue::Decimal(self.price));
        item
    }
}

impl Display for OrderRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "orderid={} product_name={} quantity={} price={}",
            self.order_id, self.product_name, self.quantity, self.price
        )
    }
}
