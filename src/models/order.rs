/// Outcome of an order-status lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    /// The order exists and has a scheduled shipment date
    Found(FoundOrder),
    /// The order API answered but knows no such order
    NotFound,
}

/// A matched order as reported by the order-status API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundOrder {
    /// The order id, echoed back from the request
    pub order_id: String,
    /// Shipment date exactly as the API reported it (ISO-8601 or epoch)
    pub shipment_date: String,
}
