// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

mod debug;


/// Create a role.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RoleCreateRequest {
    /// Data related to the creation of a role.
    pub data: RoleCreateData,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RoleCreateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::RoleCreateRequest::data].
    pub fn set_data<T: std::convert::Into<RoleCreateData>>(mut self, v: T) -> Self {
        self.data = v.into();
        self
    }
}

/// Data related to the creation of a role.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RoleCreateData {
    /// Attributes of the created role.
    pub attributes: RoleCreateAttributes,

    /// Relationships of the role object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<RoleRelationships>,

    /// Roles type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<RolesType>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RoleCreateData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [attributes][crate::model::RoleCreateData::attributes].
    pub fn set_attributes<T: std::convert::Into<RoleCreateAttributes>>(mut self, v: T) -> Self {
        self.attributes = v.into();
        self
    }

    /// Sets the value of [relationships][crate::model::RoleCreateData::relationships].
    pub fn set_relationships<T: std::convert::Into<RoleRelationships>>(mut self, v: T) -> Self {
        self.relationships = Some(v.into());
        self
    }

    /// Sets the value of [r#type][crate::model::RoleCreateData::type].
    pub fn set_type<T: std::convert::Into<RolesType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }
}

/// Attributes of the created role.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RoleCreateAttributes {
    /// Name of the role.
    pub name: String,

    /// Creation time of the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Time of last role modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RoleCreateAttributes {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::RoleCreateAttributes::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Relationships of the role object.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RoleRelationships {
    /// Relationship to multiple permissions objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<RelationshipToPermissions>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RoleRelationships {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [permissions][crate::model::RoleRelationships::permissions].
    pub fn set_permissions<T: std::convert::Into<RelationshipToPermissions>>(
        mut self,
        v: T,
    ) -> Self {
        self.permissions = Some(v.into());
        self
    }
}

/// Relationship to multiple permissions objects.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RelationshipToPermissions {
    /// Relationships to permission objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<RelationshipToPermissionData>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RelationshipToPermissions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::RelationshipToPermissions::data].
    pub fn set_data<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<RelationshipToPermissionData>,
    {
        self.data = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Relationship to permission object.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RelationshipToPermissionData {
    /// ID of the permission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Permissions resource type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RelationshipToPermissionData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::RelationshipToPermissionData::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [r#type][crate::model::RelationshipToPermissionData::type].
    pub fn set_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }
}

/// Response containing information about a single role.
///
/// This is the success payload of both
/// [create_role][crate::client::RolesApi::create_role] and
/// [get_role][crate::client::RolesApi::get_role].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RoleResponse {
    /// Role object returned by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Role>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Response containing information about multiple roles.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RolesResponse {
    /// Array of returned roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Role>>,

    /// Object describing meta attributes of response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMetaAttributes>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Role object returned by the API.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Role {
    /// Attributes of the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<RoleAttributes>,

    /// The unique identifier of the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Relationships of the role object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<RoleRelationships>,

    /// Roles type.
    #[serde(rename = "type")]
    pub r#type: RolesType,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Attributes of the role.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RoleAttributes {
    /// Creation time of the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Time of last role modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<chrono::DateTime<chrono::Utc>>,

    /// The name of the role. The name is neither unique nor a stable identifier of the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Number of users with that role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<i64>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Object describing meta attributes of response.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ResponseMetaAttributes {
    /// Pagination object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Pagination>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Pagination object.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Pagination {
    /// Total count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    /// Total count of elements matched by the filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_filtered_count: Option<i64>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Response for retrieving an application key.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ApplicationKeyResponse {
    /// Datadog application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FullApplicationKey>,

    /// Array of objects related to the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<serde_json::Value>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Datadog application key.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct FullApplicationKey {
    /// Attributes of a full application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<FullApplicationKeyAttributes>,

    /// ID of the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Application Keys resource type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ApplicationKeysType>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Attributes of a full application key.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct FullApplicationKeyAttributes {
    /// Creation date of the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// The application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The last four characters of the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,

    /// Name of the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Array of scopes to grant the application key.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub scopes: wkt::Nullable<Vec<String>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Response for a list of application keys.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ListApplicationKeysResponse {
    /// Array of application keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<PartialApplicationKey>>,

    /// Array of objects related to the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<serde_json::Value>>,

    /// Additional information related to the application key response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ApplicationKeyResponseMeta>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Partial Datadog application key.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct PartialApplicationKey {
    /// Attributes of a partial application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<PartialApplicationKeyAttributes>,

    /// ID of the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Application Keys resource type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ApplicationKeysType>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Attributes of a partial application key.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct PartialApplicationKeyAttributes {
    /// Creation date of the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// The last four characters of the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,

    /// Name of the application key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Array of scopes to grant the application key.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub scopes: wkt::Nullable<Vec<String>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Additional information related to the application key response.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ApplicationKeyResponseMeta {
    /// Max allowed number of application keys per user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_allowed_per_user: Option<i64>,

    /// Additional information related to the application key response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<ApplicationKeyResponseMetaPage>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Additional information related to the application key response.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ApplicationKeyResponseMetaPage {
    /// Total filtered application key count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_filtered_count: Option<i64>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Update rule request.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerRuleUpdateRequest {
    /// Data related to the update of a rule.
    pub data: SensitiveDataScannerRuleUpdate,

    /// Meta payload containing information about the API.
    pub meta: SensitiveDataScannerMetaVersionOnly,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SensitiveDataScannerRuleUpdateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::SensitiveDataScannerRuleUpdateRequest::data].
    pub fn set_data<T: std::convert::Into<SensitiveDataScannerRuleUpdate>>(mut self, v: T) -> Self {
        self.data = v.into();
        self
    }

    /// Sets the value of [meta][crate::model::SensitiveDataScannerRuleUpdateRequest::meta].
    pub fn set_meta<T: std::convert::Into<SensitiveDataScannerMetaVersionOnly>>(
        mut self,
        v: T,
    ) -> Self {
        self.meta = v.into();
        self
    }
}

/// Data related to the update of a rule.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerRuleUpdate {
    /// Attributes of the Sensitive Data Scanner rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SensitiveDataScannerRuleAttributes>,

    /// ID of the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Relationships of a scanning rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<SensitiveDataScannerRuleRelationships>,

    /// Sensitive Data Scanner rule type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<SensitiveDataScannerRuleType>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SensitiveDataScannerRuleUpdate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [attributes][crate::model::SensitiveDataScannerRuleUpdate::attributes].
    pub fn set_attributes<T: std::convert::Into<SensitiveDataScannerRuleAttributes>>(
        mut self,
        v: T,
    ) -> Self {
        self.attributes = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::SensitiveDataScannerRuleUpdate::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [relationships][crate::model::SensitiveDataScannerRuleUpdate::relationships].
    pub fn set_relationships<T: std::convert::Into<SensitiveDataScannerRuleRelationships>>(
        mut self,
        v: T,
    ) -> Self {
        self.relationships = Some(v.into());
        self
    }

    /// Sets the value of [r#type][crate::model::SensitiveDataScannerRuleUpdate::type].
    pub fn set_type<T: std::convert::Into<SensitiveDataScannerRuleType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }
}

/// Attributes of the Sensitive Data Scanner rule.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerRuleAttributes {
    /// Description of the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Attributes excluded from the scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_namespaces: Option<Vec<String>>,

    /// Whether or not the rule is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    /// Name of the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Attributes included in the scan. If empty, the entire event is scanned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,

    /// Not included if there is a relationship to a standard pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Integer from 1 (high) to 5 (low) indicating rule issue severity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    /// List of tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Object describing how the scanned event will be replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_replacement: Option<SensitiveDataScannerTextReplacement>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SensitiveDataScannerRuleAttributes {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::SensitiveDataScannerRuleAttributes::description].
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [excluded_namespaces][crate::model::SensitiveDataScannerRuleAttributes::excluded_namespaces].
    pub fn set_excluded_namespaces<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.excluded_namespaces = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [is_enabled][crate::model::SensitiveDataScannerRuleAttributes::is_enabled].
    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::SensitiveDataScannerRuleAttributes::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [namespaces][crate::model::SensitiveDataScannerRuleAttributes::namespaces].
    pub fn set_namespaces<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.namespaces = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [pattern][crate::model::SensitiveDataScannerRuleAttributes::pattern].
    pub fn set_pattern<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.pattern = Some(v.into());
        self
    }

    /// Sets the value of [priority][crate::model::SensitiveDataScannerRuleAttributes::priority].
    pub fn set_priority<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.priority = Some(v.into());
        self
    }

    /// Sets the value of [tags][crate::model::SensitiveDataScannerRuleAttributes::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.tags = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [text_replacement][crate::model::SensitiveDataScannerRuleAttributes::text_replacement].
    pub fn set_text_replacement<T: std::convert::Into<SensitiveDataScannerTextReplacement>>(
        mut self,
        v: T,
    ) -> Self {
        self.text_replacement = Some(v.into());
        self
    }
}

/// Object describing how the scanned event will be replaced.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerTextReplacement {
    /// Required if type is `partial_replacement_from_beginning` or `partial_replacement_from_end`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_chars: Option<i64>,

    /// Required if type is `replacement_string`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_string: Option<String>,

    /// Type of the replacement text.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<SensitiveDataScannerTextReplacementType>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SensitiveDataScannerTextReplacement {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [number_of_chars][crate::model::SensitiveDataScannerTextReplacement::number_of_chars].
    pub fn set_number_of_chars<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.number_of_chars = Some(v.into());
        self
    }

    /// Sets the value of [replacement_string][crate::model::SensitiveDataScannerTextReplacement::replacement_string].
    pub fn set_replacement_string<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.replacement_string = Some(v.into());
        self
    }

    /// Sets the value of [r#type][crate::model::SensitiveDataScannerTextReplacement::type].
    pub fn set_type<T: std::convert::Into<SensitiveDataScannerTextReplacementType>>(
        mut self,
        v: T,
    ) -> Self {
        self.r#type = Some(v.into());
        self
    }
}

/// Relationships of a scanning rule.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerRuleRelationships {
    /// A scanning group data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<SensitiveDataScannerGroupData>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SensitiveDataScannerRuleRelationships {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group][crate::model::SensitiveDataScannerRuleRelationships::group].
    pub fn set_group<T: std::convert::Into<SensitiveDataScannerGroupData>>(mut self, v: T) -> Self {
        self.group = Some(v.into());
        self
    }
}

/// A scanning group data.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerGroupData {
    /// A scanning group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SensitiveDataScannerGroup>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SensitiveDataScannerGroupData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::SensitiveDataScannerGroupData::data].
    pub fn set_data<T: std::convert::Into<SensitiveDataScannerGroup>>(mut self, v: T) -> Self {
        self.data = Some(v.into());
        self
    }
}

/// A scanning group.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerGroup {
    /// ID of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Sensitive Data Scanner group type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<SensitiveDataScannerGroupType>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SensitiveDataScannerGroup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::SensitiveDataScannerGroup::id].
    pub fn set_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [r#type][crate::model::SensitiveDataScannerGroup::type].
    pub fn set_type<T: std::convert::Into<SensitiveDataScannerGroupType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }
}

/// Meta payload containing information about the API.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerMetaVersionOnly {
    /// Version of the API (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SensitiveDataScannerMetaVersionOnly {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][crate::model::SensitiveDataScannerMetaVersionOnly::version].
    pub fn set_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }
}

/// Update rule response.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerRuleUpdateResponse {
    /// Meta payload containing information about the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<SensitiveDataScannerMetaVersionOnly>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Delete rule request.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerRuleDeleteRequest {
    /// Meta payload containing information about the API.
    pub meta: SensitiveDataScannerMetaVersionOnly,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SensitiveDataScannerRuleDeleteRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [meta][crate::model::SensitiveDataScannerRuleDeleteRequest::meta].
    pub fn set_meta<T: std::convert::Into<SensitiveDataScannerMetaVersionOnly>>(
        mut self,
        v: T,
    ) -> Self {
        self.meta = v.into();
        self
    }
}

/// Delete rule response.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SensitiveDataScannerRuleDeleteResponse {
    /// Meta payload containing information about the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<SensitiveDataScannerMetaVersionOnly>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Application Security Monitoring usage response.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UsageApplicationSecurityMonitoringResponse {
    /// Response containing Application Security Monitoring usage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<UsageDataObject>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Usage data.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UsageDataObject {
    /// Usage attributes data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<UsageAttributesObject>,

    /// Unique ID of the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Type of usage data.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<UsageTimeSeriesType>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Usage attributes data.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UsageAttributesObject {
    /// The organization name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,

    /// The product for which usage is being reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_family: Option<String>,

    /// The organization public ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,

    /// The region of the Datadog instance that the organization belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// List of usage data reported for each requested hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeseries: Option<Vec<UsageTimeSeriesObject>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Usage timeseries data.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UsageTimeSeriesObject {
    /// Datetime in ISO-8601 format, UTC. The hour for the usage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,

    /// Contains the number measured for the given usage_type during the hour.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub value: wkt::Nullable<i64>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// All the available security filters objects.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SecurityFiltersResponse {
    /// A list of security filters objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SecurityFilter>>,

    /// Optional metadata associated to the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<SecurityFilterMeta>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// The security filter's properties.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SecurityFilter {
    /// The object describing a security filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<SecurityFilterAttributes>,

    /// The ID of the security filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The type of the resource.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<SecurityFilterType>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// The object describing a security filter.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SecurityFilterAttributes {
    /// The list of exclusion filters applied in this security filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusion_filters: Option<Vec<SecurityFilterExclusionFilterResponse>>,

    /// The filtered data type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_data_type: Option<SecurityFilterFilteredDataType>,

    /// Whether the security filter is the built-in filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_builtin: Option<bool>,

    /// Whether the security filter is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    /// The security filter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The security filter query. Logs accepted by this query will be accepted by this filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// The version of the security filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// A single exclusion filter.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SecurityFilterExclusionFilterResponse {
    /// The exclusion filter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The exclusion filter query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Optional metadata associated to the response.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct SecurityFilterMeta {
    /// A warning message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Roles type.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because Datadog may add
/// additional enum variants at any time. Adding new variants is not considered
/// a breaking change. Applications should write their code in anticipation of:
///
/// - New values appearing in future releases of the client library, **and**
/// - New values received dynamically, without application changes.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum RolesType {
    Roles,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [RolesType::name].
    UnknownValue(wkt::UnknownEnumValue),
}

impl RolesType {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::Roles => "roles",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for RolesType {
    fn default() -> Self {
        Self::Roles
    }
}

impl std::fmt::Display for RolesType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for RolesType {
    fn from(value: &str) -> Self {
        match value {
            "roles" => Self::Roles,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for RolesType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for RolesType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<RolesType>::new("RolesType"))
    }
}

/// Sorting options for roles.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum RolesSort {
    NameAscending,
    NameDescending,
    ModifiedAtAscending,
    ModifiedAtDescending,
    UserCountAscending,
    UserCountDescending,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl RolesSort {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::NameAscending => "name",
            Self::NameDescending => "-name",
            Self::ModifiedAtAscending => "modified_at",
            Self::ModifiedAtDescending => "-modified_at",
            Self::UserCountAscending => "user_count",
            Self::UserCountDescending => "-user_count",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for RolesSort {
    fn default() -> Self {
        Self::NameAscending
    }
}

impl std::fmt::Display for RolesSort {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for RolesSort {
    fn from(value: &str) -> Self {
        match value {
            "name" => Self::NameAscending,
            "-name" => Self::NameDescending,
            "modified_at" => Self::ModifiedAtAscending,
            "-modified_at" => Self::ModifiedAtDescending,
            "user_count" => Self::UserCountAscending,
            "-user_count" => Self::UserCountDescending,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for RolesSort {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for RolesSort {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<RolesSort>::new("RolesSort"))
    }
}

/// Application Keys resource type.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ApplicationKeysType {
    ApplicationKeys,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl ApplicationKeysType {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::ApplicationKeys => "application_keys",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for ApplicationKeysType {
    fn default() -> Self {
        Self::ApplicationKeys
    }
}

impl std::fmt::Display for ApplicationKeysType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for ApplicationKeysType {
    fn from(value: &str) -> Self {
        match value {
            "application_keys" => Self::ApplicationKeys,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for ApplicationKeysType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ApplicationKeysType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<ApplicationKeysType>::new(
            "ApplicationKeysType",
        ))
    }
}

/// Sorting options for application keys.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ApplicationKeysSort {
    CreatedAtAscending,
    CreatedAtDescending,
    Last4Ascending,
    Last4Descending,
    NameAscending,
    NameDescending,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl ApplicationKeysSort {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::CreatedAtAscending => "created_at",
            Self::CreatedAtDescending => "-created_at",
            Self::Last4Ascending => "last4",
            Self::Last4Descending => "-last4",
            Self::NameAscending => "name",
            Self::NameDescending => "-name",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for ApplicationKeysSort {
    fn default() -> Self {
        Self::NameAscending
    }
}

impl std::fmt::Display for ApplicationKeysSort {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for ApplicationKeysSort {
    fn from(value: &str) -> Self {
        match value {
            "created_at" => Self::CreatedAtAscending,
            "-created_at" => Self::CreatedAtDescending,
            "last4" => Self::Last4Ascending,
            "-last4" => Self::Last4Descending,
            "name" => Self::NameAscending,
            "-name" => Self::NameDescending,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for ApplicationKeysSort {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ApplicationKeysSort {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<ApplicationKeysSort>::new(
            "ApplicationKeysSort",
        ))
    }
}

/// Sensitive Data Scanner rule type.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SensitiveDataScannerRuleType {
    SensitiveDataScannerRule,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl SensitiveDataScannerRuleType {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::SensitiveDataScannerRule => "sensitive_data_scanner_rule",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for SensitiveDataScannerRuleType {
    fn default() -> Self {
        Self::SensitiveDataScannerRule
    }
}

impl std::fmt::Display for SensitiveDataScannerRuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for SensitiveDataScannerRuleType {
    fn from(value: &str) -> Self {
        match value {
            "sensitive_data_scanner_rule" => Self::SensitiveDataScannerRule,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for SensitiveDataScannerRuleType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SensitiveDataScannerRuleType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<SensitiveDataScannerRuleType>::new(
            "SensitiveDataScannerRuleType",
        ))
    }
}

/// Sensitive Data Scanner group type.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SensitiveDataScannerGroupType {
    SensitiveDataScannerGroup,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl SensitiveDataScannerGroupType {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::SensitiveDataScannerGroup => "sensitive_data_scanner_group",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for SensitiveDataScannerGroupType {
    fn default() -> Self {
        Self::SensitiveDataScannerGroup
    }
}

impl std::fmt::Display for SensitiveDataScannerGroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for SensitiveDataScannerGroupType {
    fn from(value: &str) -> Self {
        match value {
            "sensitive_data_scanner_group" => Self::SensitiveDataScannerGroup,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for SensitiveDataScannerGroupType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SensitiveDataScannerGroupType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<SensitiveDataScannerGroupType>::new(
            "SensitiveDataScannerGroupType",
        ))
    }
}

/// Type of the replacement text.
///
/// `None` means no replacement. `Hash` means the data will be stubbed. The
/// partial replacements replace a fixed number of characters from either end.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SensitiveDataScannerTextReplacementType {
    None,
    Hash,
    ReplacementString,
    PartialReplacementFromBeginning,
    PartialReplacementFromEnd,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl SensitiveDataScannerTextReplacementType {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Hash => "hash",
            Self::ReplacementString => "replacement_string",
            Self::PartialReplacementFromBeginning => "partial_replacement_from_beginning",
            Self::PartialReplacementFromEnd => "partial_replacement_from_end",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for SensitiveDataScannerTextReplacementType {
    fn default() -> Self {
        Self::None
    }
}

impl std::fmt::Display for SensitiveDataScannerTextReplacementType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for SensitiveDataScannerTextReplacementType {
    fn from(value: &str) -> Self {
        match value {
            "none" => Self::None,
            "hash" => Self::Hash,
            "replacement_string" => Self::ReplacementString,
            "partial_replacement_from_beginning" => Self::PartialReplacementFromBeginning,
            "partial_replacement_from_end" => Self::PartialReplacementFromEnd,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for SensitiveDataScannerTextReplacementType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SensitiveDataScannerTextReplacementType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<SensitiveDataScannerTextReplacementType>::new(
            "SensitiveDataScannerTextReplacementType",
        ))
    }
}

/// Type of usage data.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum UsageTimeSeriesType {
    UsageTimeseries,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl UsageTimeSeriesType {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::UsageTimeseries => "usage_timeseries",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for UsageTimeSeriesType {
    fn default() -> Self {
        Self::UsageTimeseries
    }
}

impl std::fmt::Display for UsageTimeSeriesType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for UsageTimeSeriesType {
    fn from(value: &str) -> Self {
        match value {
            "usage_timeseries" => Self::UsageTimeseries,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for UsageTimeSeriesType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for UsageTimeSeriesType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<UsageTimeSeriesType>::new(
            "UsageTimeSeriesType",
        ))
    }
}

/// The type of the resource.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SecurityFilterType {
    SecurityFilters,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl SecurityFilterType {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::SecurityFilters => "security_filters",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for SecurityFilterType {
    fn default() -> Self {
        Self::SecurityFilters
    }
}

impl std::fmt::Display for SecurityFilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for SecurityFilterType {
    fn from(value: &str) -> Self {
        match value {
            "security_filters" => Self::SecurityFilters,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for SecurityFilterType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SecurityFilterType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<SecurityFilterType>::new(
            "SecurityFilterType",
        ))
    }
}

/// The filtered data type.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SecurityFilterFilteredDataType {
    Logs,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl SecurityFilterFilteredDataType {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::Logs => "logs",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for SecurityFilterFilteredDataType {
    fn default() -> Self {
        Self::Logs
    }
}

impl std::fmt::Display for SecurityFilterFilteredDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for SecurityFilterFilteredDataType {
    fn from(value: &str) -> Self {
        match value {
            "logs" => Self::Logs,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for SecurityFilterFilteredDataType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SecurityFilterFilteredDataType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<SecurityFilterFilteredDataType>::new(
            "SecurityFilterFilteredDataType",
        ))
    }
}

impl gax::request_parameter::RequestParameter for RolesSort {
    fn format(&self) -> std::result::Result<String, gax::request_parameter::Error> {
        Ok(self.name().to_string())
    }
}

impl gax::request_parameter::RequestParameter for ApplicationKeysSort {
    fn format(&self) -> std::result::Result<String, gax::request_parameter::Error> {
        Ok(self.name().to_string())
    }
}
