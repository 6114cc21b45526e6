mod requests;
mod responses;

pub use requests::{
    ChangePasswordRequest, FavoriteToggleRequest, LoginRequest, NewCommentRequest,
    NewsletterRequest, PostFilterParams, RegisterRequest, UpdateProfileRequest,
};
pub use responses::{
    AuthResponse, AvatarResponse, CategoriesResponse, CommentResponse, FavoriteStatusResponse,
    FavoriteToggleResponse, MessageResponse, ProfileResponse, StatsResponse, UserResponse,
};
