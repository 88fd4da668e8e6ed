//! Static template parts for new presentations.
//!
//! These are the bare minimum master, layout, theme, and property parts a
//! valid .pptx package needs. Generated slides do not inherit anything from
//! them beyond the color map and fonts; the decks style every shape
//! explicitly.

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// The empty shape tree every cSld-bearing part starts from.
const EMPTY_SP_TREE: &str = concat!(
    "<p:spTree>",
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    "<p:grpSpPr><a:xfrm>",
    r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#,
    "</a:xfrm></p:grpSpPr>",
    "</p:spTree>",
);

const CLR_MAP: &str = concat!(
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
    r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
);

/// Generate the slide master part.
///
/// Relationship slots: rId1 is the single slide layout, rId2 the theme.
pub fn slide_master_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<p:sldMaster xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">"#,
            "<p:cSld>",
            r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
            "{sp_tree}",
            "</p:cSld>",
            "{clr_map}",
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
            "<p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles>",
            "</p:sldMaster>",
        ),
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        sp_tree = EMPTY_SP_TREE,
        clr_map = CLR_MAP,
    )
}

/// Generate the single blank slide layout part.
pub fn slide_layout_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<p:sldLayout xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}" type="blank" preserve="1">"#,
            r#"<p:cSld name="Blank">"#,
            "{sp_tree}",
            "</p:cSld>",
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
            "</p:sldLayout>",
        ),
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        sp_tree = EMPTY_SP_TREE,
    )
}

/// Generate the notes master part.
pub fn notes_master_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<p:notesMaster xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">"#,
            "<p:cSld>",
            "{sp_tree}",
            "</p:cSld>",
            "{clr_map}",
            "</p:notesMaster>",
        ),
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        sp_tree = EMPTY_SP_TREE,
        clr_map = CLR_MAP,
    )
}

/// Generate a minimal theme part with the given heading and body fonts.
///
/// The format scheme uses placeholder-color solid fills throughout, which is
/// the smallest scheme PowerPoint accepts.
pub fn theme_xml(major_font: &str, minor_font: &str) -> String {
    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let line = format!(r#"<a:ln w="6350">{fill}</a:ln>"#);
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";

    format!(
        concat!(
            "{decl}",
            r#"<a:theme xmlns:a="{a}" name="Deck Theme">"#,
            "<a:themeElements>",
            r#"<a:clrScheme name="Deck">"#,
            r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
            r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
            r#"<a:dk2><a:srgbClr val="0B1B3A"/></a:dk2>"#,
            r#"<a:lt2><a:srgbClr val="F8FAFC"/></a:lt2>"#,
            r#"<a:accent1><a:srgbClr val="1F6FEB"/></a:accent1>"#,
            r#"<a:accent2><a:srgbClr val="0EA5A8"/></a:accent2>"#,
            r#"<a:accent3><a:srgbClr val="6B7280"/></a:accent3>"#,
            r#"<a:accent4><a:srgbClr val="16A34A"/></a:accent4>"#,
            r#"<a:accent5><a:srgbClr val="DC2626"/></a:accent5>"#,
            r#"<a:accent6><a:srgbClr val="374151"/></a:accent6>"#,
            r#"<a:hlink><a:srgbClr val="1F6FEB"/></a:hlink>"#,
            r#"<a:folHlink><a:srgbClr val="6B7280"/></a:folHlink>"#,
            "</a:clrScheme>",
            r#"<a:fontScheme name="Deck">"#,
            r#"<a:majorFont><a:latin typeface="{major}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="{minor}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
            "</a:fontScheme>",
            r#"<a:fmtScheme name="Deck">"#,
            "<a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst>",
            "<a:lnStyleLst>{line}{line}{line}</a:lnStyleLst>",
            "<a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst>",
            "<a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst>",
            "</a:fmtScheme>",
            "</a:themeElements>",
            "</a:theme>",
        ),
        decl = XML_DECL,
        a = NS_A,
        major = crate::common::xml::escape_xml(major_font),
        minor = crate::common::xml::escape_xml(minor_font),
        fill = fill,
        line = line,
        effect = effect,
    )
}

/// Generate the presentation properties part.
pub fn pres_props_xml() -> String {
    format!(r#"{}<p:presentationPr xmlns:p="{}"/>"#, XML_DECL, NS_P)
}

/// Generate the view properties part.
pub fn view_props_xml() -> String {
    format!(r#"{}<p:viewPr xmlns:p="{}"/>"#, XML_DECL, NS_P)
}

/// Generate the table styles part.
pub fn table_styles_xml() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECL, NS_A
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_references_layout_and_styles() {
        let xml = slide_master_xml();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains("<p:txStyles>"));
        assert!(xml.contains("<p:clrMap"));
    }

    #[test]
    fn layout_is_blank_type() {
        let xml = slide_layout_xml();
        assert!(xml.contains(r#"type="blank""#));
        assert!(xml.contains("<a:masterClrMapping/>"));
    }

    #[test]
    fn theme_carries_configured_fonts() {
        let xml = theme_xml("Calibri", "Calibri");
        assert_eq!(xml.matches(r#"<a:latin typeface="Calibri"/>"#).count(), 2);
        assert!(xml.contains("<a:fillStyleLst>"));
        // Three entries per style list, as the schema requires.
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }

    #[test]
    fn props_parts_are_self_closing_roots() {
        assert!(pres_props_xml().ends_with("/>"));
        assert!(view_props_xml().ends_with("/>"));
        assert!(table_styles_xml().contains("tblStyleLst"));
    }
}
