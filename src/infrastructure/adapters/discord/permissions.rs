//! Permission names as users type them (`manage_messages`, `Ban Members`, ...)

use serenity::all::Permissions;

pub fn permission_from_name(name: &str) -> Option<Permissions> {
    let normalized = name.trim().to_lowercase().replace([' ', '-'], "_");
    let permission = match normalized.as_str() {
        "create_instant_invite" => Permissions::CREATE_INSTANT_INVITE,
        "kick_members" => Permissions::KICK_MEMBERS,
        "ban_members" => Permissions::BAN_MEMBERS,
        "administrator" => Permissions::ADMINISTRATOR,
        "manage_channels" => Permissions::MANAGE_CHANNELS,
        "manage_guild" | "manage_server" => Permissions::MANAGE_GUILD,
        "add_reactions" => Permissions::ADD_REACTIONS,
        "view_audit_log" => Permissions::VIEW_AUDIT_LOG,
        "view_channel" | "read_messages" => Permissions::VIEW_CHANNEL,
        "send_messages" => Permissions::SEND_MESSAGES,
        "send_tts_messages" => Permissions::SEND_TTS_MESSAGES,
        "manage_messages" => Permissions::MANAGE_MESSAGES,
        "embed_links" => Permissions::EMBED_LINKS,
        "attach_files" => Permissions::ATTACH_FILES,
        "read_message_history" => Permissions::READ_MESSAGE_HISTORY,
        "mention_everyone" => Permissions::MENTION_EVERYONE,
        "use_external_emojis" => Permissions::USE_EXTERNAL_EMOJIS,
        "connect" => Permissions::CONNECT,
        "speak" => Permissions::SPEAK,
        "mute_members" => Permissions::MUTE_MEMBERS,
        "deafen_members" => Permissions::DEAFEN_MEMBERS,
        "move_members" => Permissions::MOVE_MEMBERS,
        "change_nickname" => Permissions::CHANGE_NICKNAME,
        "manage_nicknames" => Permissions::MANAGE_NICKNAMES,
        "manage_roles" | "manage_permissions" => Permissions::MANAGE_ROLES,
        "manage_webhooks" => Permissions::MANAGE_WEBHOOKS,
        "manage_events" => Permissions::MANAGE_EVENTS,
        "manage_threads" => Permissions::MANAGE_THREADS,
        "moderate_members" => Permissions::MODERATE_MEMBERS,
        _ => return None,
    };
    Some(permission)
}

/// Combine named permissions. Unknown names are returned separately.
pub fn resolve<'a>(names: impl IntoIterator<Item = &'a str>) -> (Permissions, Vec<String>) {
    let mut permissions = Permissions::empty();
    let mut unknown = Vec::new();
    for name in names {
        match permission_from_name(name) {
            Some(p) => permissions |= p,
            None => unknown.push(name.to_string()),
        }
    }
    (permissions, unknown)
}
