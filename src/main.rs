#[tokio::main]
async fn main() {
    pulsemate_backend::run().await;
}
