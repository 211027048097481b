mod contact;
mod faq;
mod garden;
mod home;
mod hub;
mod toast;

pub use contact::ContactView;
pub use faq::FaqView;
pub use garden::GardenView;
pub use home::HomeView;
pub use hub::HubView;
pub use toast::ToastHost;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
