//! Storefront demo
//!
//! Drives every view against an in-memory source seeded with a small
//! catalog, so the whole flow can be explored without the remote API:
//! mount, filter, sort, page, and reply to an admin notification.
//!
//! Run with: `cargo run --example storefront`

use anyhow::Result;
use bazaar::prelude::*;
use serde_json::json;
use std::sync::Mutex;

struct ConsoleTransport {
    sent: Mutex<Vec<Reply>>,
}

#[async_trait]
impl ReplyTransport for ConsoleTransport {
    async fn send(&self, reply: &Reply) -> BazaarResult<()> {
        println!("  -> reply to {}: {}", reply.to, reply.body);
        self.sent.lock().unwrap().push(reply.clone());
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::default_config();
    let source = seeded_source();

    // --- Product list ---
    let mut products = ProductListView::new(&config.views.products);
    products.mount(&source).await;

    println!("Categories: {:?}", products.categories());
    println!("Brands:     {:?}", products.brands());

    products.set_sort(ProductSort::PriceDesc);
    let page = products.current_page()?;
    println!(
        "\nProducts page {}/{} ({} items total):",
        page.page,
        page.display_pages(),
        page.total_items
    );
    for product in &page.items {
        println!(
            "  [{}] {} — Ksh {} (was Ksh {})",
            product.id,
            product.title,
            product.discounted_price(),
            product.price
        );
    }

    products.set_search("chair");
    let filtered = products.current_page()?;
    println!(
        "\nSearch \"chair\": {} match(es), back on page {}",
        filtered.total_items, filtered.page
    );

    // --- Weekly offers ---
    let mut offers = WeeklyOffersView::new(&config.views.offers);
    offers.mount(&source).await;
    let offer_page = offers.current_page()?;
    println!("\nWeekly offers (one per category):");
    for product in &offer_page.items {
        println!("  {} ({})", product.title, product.category);
    }

    // --- Orders ---
    let mut orders = OrdersView::new(&config.views.orders);
    orders.mount(&source).await;
    if let Some((first, last, total)) = orders.entry_range()? {
        println!("\nOrders: showing {} to {} of {} entries", first, last, total);
    }

    // --- Payments ---
    let mut payments = PaymentsView::new(&config.views.payments);
    payments.mount(&source).await;
    println!("Payments page total: Ksh {:.2}", payments.page_total()?);

    // --- Admin inbox ---
    let store = InMemoryProcessedStore::new();
    let transport = ConsoleTransport {
        sent: Mutex::new(Vec::new()),
    };
    let mut inbox = AdminInbox::new(&config);
    inbox.refresh(&source, &store).await;
    println!("\nInbox: {} unread message(s)", inbox.unread_count());

    if let Some(first) = inbox.messages().first().map(|m| m.id) {
        inbox
            .reply(
                &transport,
                &store,
                first,
                "admin@urbanbazaar.com",
                "Thanks for reaching out — on it!",
            )
            .await?;
    }
    println!("Inbox after reply: {} unread", inbox.unread_count());

    Ok(())
}

fn seeded_source() -> InMemorySource {
    InMemorySource::new()
        .with(
            "/products",
            json!({"products": [
                {"id": 1, "title": "Walnut Chair", "brand": "Oakline", "category": "furniture",
                 "price": 5200.0, "discountPercentage": 12.0, "images": ["chair.jpg"]},
                {"id": 2, "title": "Velvet Sofa", "brand": "Oakline", "category": "furniture",
                 "price": 18400.0, "discountPercentage": 5.0, "images": ["sofa.jpg"]},
                {"id": 3, "title": "Trail Runner", "brand": "Stride", "category": "mens-shoes",
                 "price": 6400.0, "discountPercentage": 20.0, "images": ["runner.jpg"]},
                {"id": 4, "title": "Linen Dress", "brand": "Mara", "category": "womens-dresses",
                 "price": 3900.0, "discountPercentage": 0.0, "images": ["dress.jpg"]},
                {"id": 5, "title": "Studio Laptop", "brand": "Volt", "category": "laptops",
                 "price": 95000.0, "discountPercentage": 8.0, "images": ["laptop.jpg"]}
            ]}),
        )
        .with(
            "/order",
            json!([
                {"id": 101, "order_date": "2024-06-01T09:30:00Z", "shipping_address": "14 Moi Ave",
                 "payment_method": "mpesa", "order_total": 6400.0, "status": "shipped"},
                {"id": 102, "order_date": "2024-06-02T11:00:00Z", "shipping_address": "3 Kenyatta Rd",
                 "payment_method": "card", "order_total": 18400.0, "status": "pending"}
            ]),
        )
        .with(
            "/admin/orders",
            json!({"orders": [
                {"id": 101, "user_email": "asha@example.com", "created_at": "2024-06-01T09:30:00Z",
                 "shipping_address": "14 Moi Ave", "payment_method": "mpesa",
                 "order_total": 6400.0, "status": "paid"},
                {"id": 102, "user_email": "ben@example.com", "created_at": "2024-06-02T11:00:00Z",
                 "shipping_address": "3 Kenyatta Rd", "payment_method": "card",
                 "order_total": 18400.0, "status": "paid"}
            ]}),
        )
        .with(
            "/admin/messages",
            json!({"messages": [
                {"id": 1, "name": "Asha", "email": "asha@example.com",
                 "message": "When does my chair ship?"},
                {"id": 2, "name": "Ben", "email": "ben@example.com",
                 "message": "Do you deliver to Mombasa?"}
            ]}),
        )
}
