pub mod codeforces_client;
pub mod response;

pub use codeforces_client::CodeforcesClient;
pub use response::ApiResponse;
