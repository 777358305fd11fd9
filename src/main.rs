#[tokio::main]
async fn main() {
    accha_chai_be::start_server().await;
}
