pub mod forward_pass;
pub mod gradients;
pub mod network;

pub use forward_pass::ForwardPass;
pub use gradients::Gradients;
pub use network::FeedForwardNetwork;
