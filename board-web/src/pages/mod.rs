mod login;
mod not_found;
mod post_detail;
mod post_form;
mod post_list;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use post_detail::PostDetailPage;
pub use post_form::PostFormPage;
pub use post_list::PostListPage;
