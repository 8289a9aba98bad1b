pub mod admin;
pub mod content;
pub mod gallery;
pub mod partner;
pub mod volunteer;

pub use admin::{AdminUser, LoginRequest, LoginResponse};
pub use content::{
    Activity, ActivityForm, Pillar, PillarForm, PressRelease, PressReleaseForm,
};
pub use gallery::{CreateFolderRequest, CreateImageRequest, GalleryFolder, GalleryImage, ImageFilter};
pub use partner::{Clientele, ClienteleForm, CsrConnect, CsrConnectForm};
pub use volunteer::{CreateVolunteerRequest, Volunteer};
