//! User lookup tool

use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersArgs {
    /// Twitch login names (max 100)
    pub user_names: Vec<String>,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetUsersArgs,
) -> Result<CallToolResult, McpError> {
    let users = run_task(client.get_users_by_names(args.user_names)).await?;

    let users: Vec<Value> = users
        .into_iter()
        .map(|user| {
            json!({
                "id": user.id,
                "name": user.login,
                "displayName": user.display_name,
                "description": user.description,
                "profilePictureUrl": user.profile_image_url,
                "offlinePlaceholderUrl": user.offline_image_url,
                "creationDate": user.created_at,
                "broadcasterType": user.broadcaster_type,
                "type": user.user_type,
            })
        })
        .collect();

    json_result(&users)
}
