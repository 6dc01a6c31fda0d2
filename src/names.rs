//! Symbolic names for attribute ids, MAPI property ids and property types.
//!
//! Presentation only: the decoder dispatches on the handful of ids in
//! [`crate::parser::tnef::attr`] and [`crate::model::property::prop_id`].

/// Container attribute ids.
static ATTRIBUTE_NAMES: &[(u16, &str)] = &[
    (0x0000, "Owner"),
    (0x0001, "Sent For"),
    (0x0002, "Delegate"),
    (0x0006, "Date Start"),
    (0x0007, "Date End"),
    (0x0008, "Owner Appointment ID"),
    (0x0009, "Response Requested"),
    (0x8000, "From"),
    (0x8004, "Subject"),
    (0x8005, "Date Sent"),
    (0x8006, "Date Received"),
    (0x8007, "Message Status"),
    (0x8008, "Message Class"),
    (0x8009, "Message ID"),
    (0x800a, "Parent ID"),
    (0x800b, "Conversation ID"),
    (0x800c, "Body"),
    (0x800d, "Priority"),
    (0x800f, "Attachment Data"),
    (0x8010, "Attachment File Name"),
    (0x8011, "Attachment Meta File"),
    (0x8012, "Attachment Creation Date"),
    (0x8013, "Attachment Modification Date"),
    (0x8020, "Date Modified"),
    (0x9001, "Attachment Transport Filename"),
    (0x9002, "Attachment Rendering Data"),
    (0x9003, "MAPI Properties"),
    (0x9004, "Recipients"),
    (0x9005, "Attachment"),
    (0x9006, "TNEF Version"),
    (0x9007, "OEM Codepage"),
    (0x9008, "Original Message Class"),
];

/// MAPI property ids.
static PROPERTY_NAMES: &[(u16, &str)] = &[
    (0x0001, "AcknowledgementMode"),
    (0x0002, "AlternateRecipientAllowed"),
    (0x0003, "AuthorizingUsers"),
    (0x0004, "AutoForwardComment"),
    (0x0005, "AutoForwarded"),
    (0x0006, "ContentConfidentialityAlgorithmID"),
    (0x0007, "ContentCorrelator"),
    (0x0008, "ContentIdentifier"),
    (0x0009, "ContentLength"),
    (0x000a, "ContentReturnRequested"),
    (0x000b, "ConversationKey"),
    (0x000c, "ConversionEits"),
    (0x000d, "ConversionWithLossProhibited"),
    (0x000e, "ConvertedEits"),
    (0x000f, "DeferredDeliveryTime"),
    (0x0010, "DeliverTime"),
    (0x0011, "DiscardReason"),
    (0x0012, "DisclosureOfRecipients"),
    (0x0013, "DlExpansionHistory"),
    (0x0014, "DlExpansionProhibited"),
    (0x0015, "ExpiryTime"),
    (0x0016, "ImplicitConversionProhibited"),
    (0x0017, "Importance"),
    (0x0018, "IpmID"),
    (0x0019, "LatestDeliveryTime"),
    (0x001a, "MessageClass"),
    (0x001b, "MessageDeliveryID"),
    (0x001e, "MessageSecurityLabel"),
    (0x001f, "ObsoletedIpms"),
    (0x0020, "OriginallyIntendedRecipientName"),
    (0x0021, "OriginalEits"),
    (0x0022, "OriginatorCertificate"),
    (0x0023, "OriginatorDeliveryReportRequested"),
    (0x0024, "OriginatorReturnAddress"),
    (0x0025, "ParentKey"),
    (0x0026, "Priority"),
    (0x0027, "OriginCheck"),
    (0x0028, "ProofOfSubmissionRequested"),
    (0x0029, "ReadReceiptRequested"),
    (0x002a, "ReceiptTime"),
    (0x002b, "RecipientReassignmentProhibited"),
    (0x002c, "RedirectionHistory"),
    (0x002d, "RelatedIpms"),
    (0x002e, "OriginalSensitivity"),
    (0x002f, "Languages"),
    (0x0030, "ReplyTime"),
    (0x0031, "ReportTag"),
    (0x0032, "ReportTime"),
    (0x0033, "ReturnedIpm"),
    (0x0034, "Security"),
    (0x0035, "IncompleteCopy"),
    (0x0036, "Sensitivity"),
    (0x0037, "Subject"),
    (0x0038, "SubjectIpm"),
    (0x0039, "ClientSubmitTime"),
    (0x003a, "ReportName"),
    (0x003b, "SentRepresentingSearchKey"),
    (0x003c, "X400ContentType"),
    (0x003d, "SubjectPrefix"),
    (0x003e, "NonReceiptReason"),
    (0x003f, "ReceivedByEntryID"),
    (0x0040, "ReceivedByName"),
    (0x0041, "SentRepresentingEntryID"),
    (0x0042, "SentRepresentingName"),
    (0x0043, "RcvdRepresentingEntryID"),
    (0x0044, "RcvdRepresentingName"),
    (0x0045, "ReportEntryID"),
    (0x0046, "ReadReceiptEntryID"),
    (0x0047, "MessageSubmissionID"),
    (0x0048, "ProviderSubmitTime"),
    (0x0049, "OriginalSubject"),
    (0x004a, "DiscVal"),
    (0x004b, "OrigMessageClass"),
    (0x004c, "OriginalAuthorEntryID"),
    (0x004d, "OriginalAuthorName"),
    (0x004e, "OriginalSubmitTime"),
    (0x004f, "ReplyRecipientEntries"),
    (0x0050, "ReplyRecipientNames"),
    (0x0051, "ReceivedBySearchKey"),
    (0x0052, "RcvdRepresentingSearchKey"),
    (0x0053, "ReadReceiptSearchKey"),
    (0x0054, "ReportSearchKey"),
    (0x0055, "OriginalDeliveryTime"),
    (0x0056, "OriginalAuthorSearchKey"),
    (0x0057, "MessageToMe"),
    (0x0058, "MessageCcMe"),
    (0x0059, "MessageRecipMe"),
    (0x005a, "OriginalSenderName"),
    (0x005b, "OriginalSenderEntryID"),
    (0x005c, "OriginalSenderSearchKey"),
    (0x005d, "OriginalSentRepresentingName"),
    (0x005e, "OriginalSentRepresentingEntryID"),
    (0x005f, "OriginalSentRepresentingSearchKey"),
    (0x0060, "StartDate"),
    (0x0061, "EndDate"),
    (0x0062, "OwnerApptID"),
    (0x0063, "ResponseRequested"),
    (0x0064, "SentRepresentingAddrtype"),
    (0x0065, "SentRepresentingEmailAddress"),
    (0x0066, "OriginalSenderAddrtype"),
    (0x0067, "OriginalSenderEmailAddress"),
    (0x0068, "OriginalSentRepresentingAddrtype"),
    (0x0069, "OriginalSentRepresentingEmailAddress"),
    (0x0070, "ConversationTopic"),
    (0x0071, "ConversationIndex"),
    (0x0072, "OriginalDisplayBcc"),
    (0x0073, "OriginalDisplayCc"),
    (0x0074, "OriginalDisplayTo"),
    (0x0075, "ReceivedByAddrtype"),
    (0x0076, "ReceivedByEmailAddress"),
    (0x0077, "RcvdRepresentingAddrtype"),
    (0x0078, "RcvdRepresentingEmailAddress"),
    (0x0079, "OriginalAuthorAddrtype"),
    (0x007a, "OriginalAuthorEmailAddress"),
    (0x007b, "OriginallyIntendedRecipAddrtype"),
    (0x007c, "OriginallyIntendedRecipEmailAddress"),
    (0x007d, "TransportMessageHeaders"),
    (0x007e, "Delegation"),
    (0x007f, "TnefCorrelationKey"),
    (0x1000, "Body"),
    (0x1013, "BodyHTML"),
    (0x1001, "ReportText"),
    (0x1002, "OriginatorAndDlExpansionHistory"),
    (0x1003, "ReportingDlName"),
    (0x1004, "ReportingMtaCertificate"),
    (0x1006, "RtfSyncBodyCrc"),
    (0x1007, "RtfSyncBodyCount"),
    (0x1008, "RtfSyncBodyTag"),
    (0x1009, "RtfCompressed"),
    (0x1010, "RtfSyncPrefixCount"),
    (0x1011, "RtfSyncTrailingCount"),
    (0x1012, "OriginallyIntendedRecipEntryID"),
    (0x0c00, "ContentIntegrityCheck"),
    (0x0c01, "ExplicitConversion"),
    (0x0c02, "IpmReturnRequested"),
    (0x0c03, "MessageToken"),
    (0x0c04, "NdrReasonCode"),
    (0x0c05, "NdrDiagCode"),
    (0x0c06, "NonReceiptNotificationRequested"),
    (0x0c07, "DeliveryPoint"),
    (0x0c08, "OriginatorNonDeliveryReportRequested"),
    (0x0c09, "OriginatorRequestedAlternateRecipient"),
    (0x0c0a, "PhysicalDeliveryBureauFaxDelivery"),
    (0x0c0b, "PhysicalDeliveryMode"),
    (0x0c0c, "PhysicalDeliveryReportRequest"),
    (0x0c0d, "PhysicalForwardingAddress"),
    (0x0c0e, "PhysicalForwardingAddressRequested"),
    (0x0c0f, "PhysicalForwardingProhibited"),
    (0x0c10, "PhysicalRenditionAttributes"),
    (0x0c11, "ProofOfDelivery"),
    (0x0c12, "ProofOfDeliveryRequested"),
    (0x0c13, "RecipientCertificate"),
    (0x0c14, "RecipientNumberForAdvice"),
    (0x0c15, "RecipientType"),
    (0x0c16, "RegisteredMailType"),
    (0x0c17, "ReplyRequested"),
    (0x0c18, "RequestedDeliveryMethod"),
    (0x0c19, "SenderEntryID"),
    (0x0c1a, "SenderName"),
    (0x0c1b, "SupplementaryInfo"),
    (0x0c1c, "TypeOfMtsUser"),
    (0x0c1d, "SenderSearchKey"),
    (0x0c1e, "SenderAddrtype"),
    (0x0c1f, "SenderEmailAddress"),
    (0x0e00, "CurrentVersion"),
    (0x0e01, "DeleteAfterSubmit"),
    (0x0e02, "DisplayBcc"),
    (0x0e03, "DisplayCc"),
    (0x0e04, "DisplayTo"),
    (0x0e05, "ParentDisplay"),
    (0x0e06, "MessageDeliveryTime"),
    (0x0e07, "MessageFlags"),
    (0x0e08, "MessageSize"),
    (0x0e09, "ParentEntryID"),
    (0x0e0a, "SentmailEntryID"),
    (0x0e0c, "Correlate"),
    (0x0e0d, "CorrelateMtsID"),
    (0x0e0e, "DiscreteValues"),
    (0x0e0f, "Responsibility"),
    (0x0e10, "SpoolerStatus"),
    (0x0e11, "TransportStatus"),
    (0x0e12, "MessageRecipients"),
    (0x0e13, "MessageAttachments"),
    (0x0e14, "SubmitFlags"),
    (0x0e15, "RecipientStatus"),
    (0x0e16, "TransportKey"),
    (0x0e17, "MsgStatus"),
    (0x0e18, "MessageDownloadTime"),
    (0x0e19, "CreationVersion"),
    (0x0e1a, "ModifyVersion"),
    (0x0e1b, "Hasattach"),
    (0x0e1c, "BodyCrc"),
    (0x0e1d, "NormalizedSubject"),
    (0x0e1f, "RtfInSync"),
    (0x0e20, "AttachSize"),
    (0x0e21, "AttachNum"),
    (0x0e22, "Preprocess"),
    (0x0e25, "OriginatingMtaCertificate"),
    (0x0e26, "ProofOfSubmission"),
    (0x0fff, "EntryID"),
    (0x0ffe, "ObjectType"),
    (0x0ffd, "Icon"),
    (0x0ffc, "MiniIcon"),
    (0x0ffb, "StoreEntryID"),
    (0x0ffa, "StoreRecordKey"),
    (0x0ff9, "RecordKey"),
    (0x0ff8, "MappingSignature"),
    (0x0ff7, "AccessLevel"),
    (0x0ff6, "InstanceKey"),
    (0x0ff5, "RowType"),
    (0x0ff4, "Access"),
    (0x3000, "RowID"),
    (0x3001, "DisplayName"),
    (0x3002, "Addrtype"),
    (0x3003, "EmailAddress"),
    (0x3004, "Comment"),
    (0x3005, "Depth"),
    (0x3006, "ProviderDisplay"),
    (0x3007, "CreationTime"),
    (0x3008, "LastModificationTime"),
    (0x3009, "ResourceFlags"),
    (0x300a, "ProviderDllName"),
    (0x300b, "SearchKey"),
    (0x300c, "ProviderUID"),
    (0x300d, "ProviderOrdinal"),
    (0x3301, "FormVersion"),
    (0x3302, "FormClsid"),
    (0x3303, "FormContactName"),
    (0x3304, "FormCategory"),
    (0x3305, "FormCategorySub"),
    (0x3306, "FormHostMap"),
    (0x3307, "FormHidden"),
    (0x3308, "FormDesignerName"),
    (0x3309, "FormDesignerGuID"),
    (0x330a, "FormMessageBehavior"),
    (0x3400, "DefaultStore"),
    (0x340d, "StoreSupportMask"),
    (0x340e, "StoreState"),
    (0x3410, "IpmSubtreeSearchKey"),
    (0x3411, "IpmOutboxSearchKey"),
    (0x3412, "IpmWastebasketSearchKey"),
    (0x3413, "IpmSentmailSearchKey"),
    (0x3414, "MdbProvider"),
    (0x3415, "ReceiveFolderSettings"),
    (0x35df, "ValidFolderMask"),
    (0x35e0, "IpmSubtreeEntryID"),
    (0x35e2, "IpmOutboxEntryID"),
    (0x35e3, "IpmWastebasketEntryID"),
    (0x35e4, "IpmSentmailEntryID"),
    (0x35e5, "ViewsEntryID"),
    (0x35e6, "CommonViewsEntryID"),
    (0x35e7, "FinderEntryID"),
    (0x3600, "ContainerFlags"),
    (0x3601, "FolderType"),
    (0x3602, "ContentCount"),
    (0x3603, "ContentUnread"),
    (0x3604, "CreateTemplates"),
    (0x3605, "DetailsTable"),
    (0x3607, "Search"),
    (0x3609, "Selectable"),
    (0x360a, "Subfolders"),
    (0x360b, "Status"),
    (0x360c, "Anr"),
    (0x360d, "ContentsSortOrder"),
    (0x360e, "ContainerHierarchy"),
    (0x360f, "ContainerContents"),
    (0x3610, "FolderAssociatedContents"),
    (0x3611, "DefCreateDl"),
    (0x3612, "DefCreateMailuser"),
    (0x3613, "ContainerClass"),
    (0x3614, "ContainerModifyVersion"),
    (0x3615, "AbProviderID"),
    (0x3616, "DefaultViewEntryID"),
    (0x3617, "AssocContentCount"),
    (0x3700, "AttachmentX400Parameters"),
    (0x3701, "AttachDataObj"),
    (0x3702, "AttachEncoding"),
    (0x3703, "AttachExtension"),
    (0x3704, "AttachFilename"),
    (0x3705, "AttachMethod"),
    (0x3707, "AttachLongFilename"),
    (0x3708, "AttachPathname"),
    (0x3709, "AttachRendering"),
    (0x370a, "AttachTag"),
    (0x370b, "RenderingPosition"),
    (0x370c, "AttachTransportName"),
    (0x370d, "AttachLongPathname"),
    (0x370e, "AttachMimeTag"),
    (0x370f, "AttachAdditionalInfo"),
    (0x3900, "DisplayType"),
    (0x3902, "TemplateID"),
    (0x3904, "PrimaryCapability"),
    (0x39ff, "7bitDisplayName"),
    (0x3a00, "Account"),
    (0x3a01, "AlternateRecipient"),
    (0x3a02, "CallbackTelephoneNumber"),
    (0x3a03, "ConversionProhibited"),
    (0x3a04, "DiscloseRecipients"),
    (0x3a05, "Generation"),
    (0x3a06, "GivenName"),
    (0x3a07, "GovernmentIDNumber"),
    (0x3a08, "BusinessTelephoneNumber"),
    (0x3a09, "HomeTelephoneNumber"),
    (0x3a0a, "Initials"),
    (0x3a0b, "Keyword"),
    (0x3a0c, "Language"),
    (0x3a0d, "Location"),
    (0x3a0e, "MailPermission"),
    (0x3a0f, "MhsCommonName"),
    (0x3a10, "OrganizationalIDNumber"),
    (0x3a11, "Surname"),
    (0x3a12, "OriginalEntryID"),
    (0x3a13, "OriginalDisplayName"),
    (0x3a14, "OriginalSearchKey"),
    (0x3a15, "PostalAddress"),
    (0x3a16, "CompanyName"),
    (0x3a17, "Title"),
    (0x3a18, "DepartmentName"),
    (0x3a19, "OfficeLocation"),
    (0x3a1a, "PrimaryTelephoneNumber"),
    (0x3a1b, "Business2TelephoneNumber"),
    (0x3a1c, "MobileTelephoneNumber"),
    (0x3a1d, "RadioTelephoneNumber"),
    (0x3a1e, "CarTelephoneNumber"),
    (0x3a1f, "OtherTelephoneNumber"),
    (0x3a20, "TransmitableDisplayName"),
    (0x3a21, "PagerTelephoneNumber"),
    (0x3a22, "UserCertificate"),
    (0x3a23, "PrimaryFaxNumber"),
    (0x3a24, "BusinessFaxNumber"),
    (0x3a25, "HomeFaxNumber"),
    (0x3a26, "Country"),
    (0x3a27, "Locality"),
    (0x3a28, "StateOrProvince"),
    (0x3a29, "StreetAddress"),
    (0x3a2a, "PostalCode"),
    (0x3a2b, "PostOfficeBox"),
    (0x3a2c, "TelexNumber"),
    (0x3a2d, "IsdnNumber"),
    (0x3a2e, "AssistantTelephoneNumber"),
    (0x3a2f, "Home2TelephoneNumber"),
    (0x3a30, "Assistant"),
    (0x3a40, "SendRichInfo"),
    (0x3a41, "WeddingAnniversary"),
    (0x3a42, "Birthday"),
    (0x3a43, "Hobbies"),
    (0x3a44, "MiddleName"),
    (0x3a45, "DisplayNamePrefix"),
    (0x3a46, "Profession"),
    (0x3a47, "PreferredByName"),
    (0x3a48, "SpouseName"),
    (0x3a49, "ComputerNetworkName"),
    (0x3a4a, "CustomerID"),
    (0x3a4b, "TtytddPhoneNumber"),
    (0x3a4c, "FtpSite"),
    (0x3a4d, "Gender"),
    (0x3a4e, "ManagerName"),
    (0x3a4f, "Nickname"),
    (0x3a50, "PersonalHomePage"),
    (0x3a51, "BusinessHomePage"),
    (0x3a52, "ContactVersion"),
    (0x3a53, "ContactEntryids"),
    (0x3a54, "ContactAddrtypes"),
    (0x3a55, "ContactDefaultAddressIndex"),
    (0x3a56, "ContactEmailAddresses"),
    (0x3a57, "CompanyMainPhoneNumber"),
    (0x3a58, "ChildrensNames"),
    (0x3a59, "HomeAddressCity"),
    (0x3a5a, "HomeAddressCountry"),
    (0x3a5b, "HomeAddressPostalCode"),
    (0x3a5c, "HomeAddressStateOrProvince"),
    (0x3a5d, "HomeAddressStreet"),
    (0x3a5e, "HomeAddressPostOfficeBox"),
    (0x3a5f, "OtherAddressCity"),
    (0x3a60, "OtherAddressCountry"),
    (0x3a61, "OtherAddressPostalCode"),
    (0x3a62, "OtherAddressStateOrProvince"),
    (0x3a63, "OtherAddressStreet"),
    (0x3a64, "OtherAddressPostOfficeBox"),
    (0x3d00, "StoreProviders"),
    (0x3d01, "AbProviders"),
    (0x3d02, "TransportProviders"),
    (0x3d04, "DefaultProfile"),
    (0x3d05, "AbSearchPath"),
    (0x3d06, "AbDefaultDir"),
    (0x3d07, "AbDefaultPab"),
    (0x3d08, "FilteringHooks"),
    (0x3d09, "ServiceName"),
    (0x3d0a, "ServiceDllName"),
    (0x3d0b, "ServiceEntryName"),
    (0x3d0c, "ServiceUID"),
    (0x3d0d, "ServiceExtraUids"),
    (0x3d0e, "Services"),
    (0x3d0f, "ServiceSupportFiles"),
    (0x3d10, "ServiceDeleteFiles"),
    (0x3d11, "AbSearchPathUpdate"),
    (0x3d12, "ProfileName"),
    (0x3e00, "IdentityDisplay"),
    (0x3e01, "IdentityEntryID"),
    (0x3e02, "ResourceMethods"),
    (0x3e03, "ResourceType"),
    (0x3e04, "StatusCode"),
    (0x3e05, "IdentitySearchKey"),
    (0x3e06, "OwnStoreEntryID"),
    (0x3e07, "ResourcePath"),
    (0x3e08, "StatusString"),
    (0x3e09, "X400DeferredDeliveryCancel"),
    (0x3e0a, "HeaderFolderEntryID"),
    (0x3e0b, "RemoteProgress"),
    (0x3e0c, "RemoteProgressText"),
    (0x3e0d, "RemoteValidateOk"),
    (0x3f00, "ControlFlags"),
    (0x3f01, "ControlStructure"),
    (0x3f02, "ControlType"),
    (0x3f03, "Deltax"),
    (0x3f04, "Deltay"),
    (0x3f05, "Xpos"),
    (0x3f06, "Ypos"),
    (0x3f07, "ControlID"),
    (0x3f08, "InitialDetailsPane"),
    (0x67f0, "IdSecureMin"),
    (0x67ff, "IdSecureMax"),
];

/// Property type codes.
static TYPE_NAMES: &[(u16, &str)] = &[
    (0x0000, "Unspecified"),
    (0x0001, "Null"),
    (0x0002, "Short"),
    (0x0003, "Int"),
    (0x0004, "Float"),
    (0x0005, "Double"),
    (0x0006, "Currency"),
    (0x0007, "AppTime"),
    (0x000a, "Error"),
    (0x000b, "Boolean"),
    (0x000d, "Object"),
    (0x0014, "Int8Byte"),
    (0x001e, "String8"),
    (0x001f, "Unicode"),
    (0x0040, "SysTime"),
    (0x0048, "ClsId"),
    (0x0102, "Binary"),
];

fn lookup(table: &'static [(u16, &'static str)], code: u16) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

/// Human-readable name of a container attribute id.
pub fn attribute_name(code: u16) -> Option<&'static str> {
    lookup(ATTRIBUTE_NAMES, code)
}

/// Symbolic name of a MAPI property id.
pub fn property_name(code: u16) -> Option<&'static str> {
    lookup(PROPERTY_NAMES, code)
}

/// Name of a property type code (multi-value flag must be stripped).
pub fn type_name(code: u16) -> Option<&'static str> {
    lookup(TYPE_NAMES, code)
}

/// Property name, or the id in hex when unknown.
pub fn property_label(code: u16) -> String {
    property_name(code).map_or_else(|| format!("{code:#06x}"), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::{prop_id, prop_type};
    use crate::parser::tnef::attr;

    #[test]
    fn test_dispatch_ids_have_names() {
        assert_eq!(attribute_name(attr::ATTACH_REND_DATA), Some("Attachment Rendering Data"));
        assert_eq!(attribute_name(attr::MAPI_PROPS), Some("MAPI Properties"));
        assert_eq!(attribute_name(attr::ATTACH_TITLE), Some("Attachment File Name"));
        assert_eq!(property_name(prop_id::BODY), Some("Body"));
        assert_eq!(property_name(prop_id::BODY_HTML), Some("BodyHTML"));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(prop_type::UNICODE_STRING), Some("Unicode"));
        assert_eq!(type_name(prop_type::BINARY), Some("Binary"));
        assert_eq!(type_name(0x7777), None);
    }

    #[test]
    fn test_property_label_falls_back_to_hex() {
        assert_eq!(property_label(0x0037), "Subject");
        assert_eq!(property_label(0x8123), "0x8123");
    }

    #[test]
    fn test_tables_have_unique_codes() {
        for table in [ATTRIBUTE_NAMES, PROPERTY_NAMES, TYPE_NAMES] {
            let mut codes: Vec<u16> = table.iter().map(|(c, _)| *c).collect();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), table.len());
        }
    }
}
