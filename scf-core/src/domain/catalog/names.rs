// scf-core/src/domain/catalog/names.rs
//
// Display names for every framework column of the SCF 2025.4 release.
// Table order is the registry order: it decides how ties are listed.

/// `(framework key, display name)` pairs.
pub static FRAMEWORK_NAMES: &[(&str, &str)] = &[
    // --- Tier 0: AI Governance ---
    ("iso_42001_2023", "ISO/IEC 42001:2023 (AI Management System)"),
    ("nist_ai_rmf_1.0", "NIST AI 100-1 (AI Risk Management Framework) 1.0"),
    ("nist_ai_600_1", "NIST AI 600-1 (Generative AI Profile)"),
    ("eu_ai_act", "EU AI Act (Regulation 2024/1689)"),
    ("eu_cyber_resilience_act", "EU Cyber Resilience Act"),
    ("eu_cra_annexes", "EU Cyber Resilience Act Annexes"),
    // --- SOC 2 / Audit ---
    ("soc_2_tsc", "AICPA TSC 2017:2022 (SOC 2)"),
    // --- CIS Controls ---
    ("cis_csc_8.1", "CIS Critical Security Controls v8.1"),
    ("cis_csc_8.1_ig1", "CIS CSC v8.1 Implementation Group 1"),
    ("cis_csc_8.1_ig2", "CIS CSC v8.1 Implementation Group 2"),
    ("cis_csc_8.1_ig3", "CIS CSC v8.1 Implementation Group 3"),
    // --- Governance ---
    ("cobit_2019", "COBIT 2019"),
    ("coso_2017", "COSO 2017"),
    // --- Cloud Security ---
    ("csa_ccm_4", "CSA Cloud Controls Matrix v4"),
    ("csa_iot_scf_2", "CSA IoT Security Controls Framework 2"),
    ("germany_c5_2020", "Germany C5:2020 (Cloud)"),
    // --- ISO Standards ---
    ("iso_27001_2022", "ISO/IEC 27001:2022"),
    ("iso_27002_2022", "ISO/IEC 27002:2022"),
    ("iso_27017_2015", "ISO/IEC 27017:2015 (Cloud Security)"),
    ("iso_27018_2014", "ISO/IEC 27018:2014 (Cloud Privacy)"),
    ("iso_27701_2025", "ISO/IEC 27701:2025 (Privacy Extension)"),
    ("iso_22301_2019", "ISO/IEC 22301:2019 (Business Continuity)"),
    ("iso_29100_2024", "ISO/IEC 29100:2024 (Privacy Framework)"),
    ("iso_31000_2009", "ISO 31000:2009 (Risk Management)"),
    ("iso_31010_2009", "ISO 31010:2009 (Risk Assessment)"),
    ("iso_sae_21434_2021", "ISO/SAE 21434:2021 (Automotive Cybersecurity)"),
    // --- Industrial / OT ---
    ("iec_62443_4_2_2019", "IEC 62443-4-2:2019 (Industrial Security)"),
    ("iec_tr_60601_4_5_2021", "IEC TR 60601-4-5:2021 (Medical IT)"),
    ("nerc_cip_2024", "NERC CIP 2024"),
    ("nist_800_82_r3_low", "NIST SP 800-82 R3 OT Overlay (Low)"),
    ("nist_800_82_r3_moderate", "NIST SP 800-82 R3 OT Overlay (Moderate)"),
    ("nist_800_82_r3_high", "NIST SP 800-82 R3 OT Overlay (High)"),
    ("imo_maritime_cyber", "IMO Maritime Cyber Risk Management"),
    // --- Privacy Frameworks ---
    ("gdpr", "General Data Protection Regulation (GDPR)"),
    ("nist_privacy_framework_1.0", "NIST Privacy Framework 1.0"),
    ("apec_privacy_2015", "APEC Privacy Framework 2015"),
    ("gapp", "Generally Accepted Privacy Principles (GAPP)"),
    ("oecd_privacy", "OECD Privacy Principles"),
    ("us_dpf", "US Data Privacy Framework"),
    // --- NIST Frameworks ---
    ("nist_csf_2.0", "NIST Cybersecurity Framework 2.0"),
    ("nist_800_37_r2", "NIST SP 800-37 R2 (Risk Management Framework)"),
    ("nist_800_39", "NIST SP 800-39 (Risk Management)"),
    ("nist_800_53_r4", "NIST SP 800-53 R4"),
    ("nist_800_53_r4_low", "NIST SP 800-53 R4 (Low)"),
    ("nist_800_53_r4_moderate", "NIST SP 800-53 R4 (Moderate)"),
    ("nist_800_53_r4_high", "NIST SP 800-53 R4 (High)"),
    ("nist_800_53_r5", "NIST SP 800-53 R5"),
    ("nist_800_53b_r5_privacy", "NIST SP 800-53B R5 (Privacy)"),
    ("nist_800_53b_r5_low", "NIST SP 800-53B R5 (Low)"),
    ("nist_800_53b_r5_moderate", "NIST SP 800-53B R5 (Moderate)"),
    ("nist_800_53b_r5_high", "NIST SP 800-53B R5 (High)"),
    ("nist_800_53_r5_noc", "NIST SP 800-53 R5 (NOC)"),
    ("nist_800_63b", "NIST SP 800-63B (Digital Identity)"),
    ("nist_800_160", "NIST SP 800-160 (Systems Security Engineering)"),
    ("nist_800_161_r1", "NIST SP 800-161 R1 (Supply Chain)"),
    ("nist_800_161_r1_baseline", "NIST SP 800-161 R1 C-SCRM Baseline"),
    ("nist_800_161_r1_flowdown", "NIST SP 800-161 R1 Flow Down"),
    ("nist_800_161_r1_level1", "NIST SP 800-161 R1 Level 1"),
    ("nist_800_161_r1_level2", "NIST SP 800-161 R1 Level 2"),
    ("nist_800_161_r1_level3", "NIST SP 800-161 R1 Level 3"),
    ("nist_800_171_r2", "NIST SP 800-171 R2 (CUI)"),
    ("nist_800_171a", "NIST SP 800-171A (Assessment)"),
    ("nist_800_171_r3", "NIST SP 800-171 R3 (CUI)"),
    ("nist_800_171a_r3", "NIST SP 800-171A R3 (Assessment)"),
    ("nist_800_172", "NIST SP 800-172 (Enhanced CUI)"),
    ("nist_800_207", "NIST SP 800-207 (Zero Trust)"),
    ("nist_800_218", "NIST SP 800-218 (SSDF)"),
    // --- FedRAMP ---
    ("fedramp_r4", "FedRAMP R4"),
    ("fedramp_r4_low", "FedRAMP R4 (Low)"),
    ("fedramp_r4_moderate", "FedRAMP R4 (Moderate)"),
    ("fedramp_r4_high", "FedRAMP R4 (High)"),
    ("fedramp_r4_lisaas", "FedRAMP R4 (LI-SaaS)"),
    ("fedramp_r5", "FedRAMP R5"),
    ("fedramp_r5_low", "FedRAMP R5 (Low)"),
    ("fedramp_r5_moderate", "FedRAMP R5 (Moderate)"),
    ("fedramp_r5_high", "FedRAMP R5 (High)"),
    ("fedramp_r5_lisaas", "FedRAMP R5 (LI-SaaS)"),
    // --- GovRAMP / StateRAMP ---
    ("govramp_core", "GovRAMP Core"),
    ("govramp_low", "GovRAMP Low"),
    ("govramp_low_plus", "GovRAMP Low+"),
    ("govramp_moderate", "GovRAMP Moderate"),
    ("govramp_high", "GovRAMP High"),
    // --- CMMC ---
    ("cmmc_2.0_level_1", "CMMC 2.0 Level 1"),
    ("cmmc_2.0_level_1_aos", "CMMC 2.0 Level 1 AOs"),
    ("cmmc_2.0_level_2", "CMMC 2.0 Level 2"),
    ("cmmc_2.0_level_3", "CMMC 2.0 Level 3"),
    // --- PCI DSS ---
    ("pci_dss_4.0.1", "PCI DSS v4.0.1"),
    ("pci_dss_4.0.1_saq_a", "PCI DSS v4.0.1 SAQ A"),
    ("pci_dss_4.0.1_saq_a_ep", "PCI DSS v4.0.1 SAQ A-EP"),
    ("pci_dss_4.0.1_saq_b", "PCI DSS v4.0.1 SAQ B"),
    ("pci_dss_4.0.1_saq_b_ip", "PCI DSS v4.0.1 SAQ B-IP"),
    ("pci_dss_4.0.1_saq_c", "PCI DSS v4.0.1 SAQ C"),
    ("pci_dss_4.0.1_saq_c_vt", "PCI DSS v4.0.1 SAQ C-VT"),
    ("pci_dss_4.0.1_saq_d_merchant", "PCI DSS v4.0.1 SAQ D (Merchant)"),
    ("pci_dss_4.0.1_saq_d_sp", "PCI DSS v4.0.1 SAQ D (Service Provider)"),
    ("pci_dss_4.0.1_saq_p2pe", "PCI DSS v4.0.1 SAQ P2PE"),
    // --- Healthcare ---
    ("hipaa_security_rule", "HIPAA Security Rule / NIST SP 800-66 R2"),
    ("hipaa_admin_2013", "HIPAA Administrative Simplification 2013"),
    ("hipaa_hicp_small", "HIPAA HICP Small Practice"),
    ("hipaa_hicp_medium", "HIPAA HICP Medium Practice"),
    ("hipaa_hicp_large", "HIPAA HICP Large Practice"),
    ("cms_mars_e_2.0", "CMS MARS-E 2.0 (Healthcare Exchanges)"),
    ("hhs_45_cfr_155_260", "HHS 45 CFR 155.260"),
    // --- US Financial ---
    ("sox", "Sarbanes-Oxley Act (SOX)"),
    ("glba_cfr_314_2023", "GLBA CFR 314 (Dec 2023)"),
    ("ffiec", "FFIEC Cybersecurity Assessment"),
    ("us_finra", "US FINRA"),
    ("sec_cybersecurity_rule", "SEC Cybersecurity Rule"),
    ("us_facta", "US FACTA"),
    ("ftc_act", "FTC Act"),
    ("naic_mdl_668", "NAIC Insurance Data Security Model Law (MDL-668)"),
    ("fca_crm", "FCA CRM"),
    // --- US Federal / Defense ---
    ("cjis_5.9.3", "CJIS Security Policy v5.9.3"),
    ("irs_1075", "IRS Publication 1075"),
    ("dfars_252_204_70xx", "DFARS 252.204-70xx (Cybersecurity)"),
    ("far_52_204_21", "FAR 52.204-21 (Basic Safeguarding)"),
    ("far_52_204_25", "FAR 52.204-25 (NDAA Section 889)"),
    ("far_52_204_27", "FAR 52.204-27"),
    ("itar_part_120", "ITAR Part 120"),
    ("nispom_2020", "NISPOM 2020"),
    ("us_nnpi", "US NNPI (Unclassified)"),
    ("nstc_nspm_33", "NSTC NSPM-33"),
    ("eo_14028", "EO 14028 (Improving Cybersecurity)"),
    ("dod_zt_roadmap", "DoD Zero Trust Execution Roadmap"),
    ("dod_ztra_2.0", "DoD Zero Trust Reference Architecture 2.0"),
    ("dhs_cisa_ssdaf", "DHS CISA SSDAF"),
    ("dhs_cisa_tic_3.0", "DHS CISA TIC 3.0"),
    ("dhs_ztcf", "DHS Zero Trust Capability Framework"),
    ("us_cisa_cpg_2022", "CISA Cross-Sector CPG 2022"),
    ("us_c2m2_2.1", "US C2M2 2.1 (Capability Maturity)"),
    ("us_cert_rmm_1.2", "US CERT RMM 1.2 (Resilience)"),
    ("us_ferpa", "US FERPA (Education Privacy)"),
    ("us_fipps", "US FIPPs (Fair Information Practice)"),
    ("us_coppa", "US COPPA (Children's Privacy)"),
    ("fda_21_cfr_part_11", "FDA 21 CFR Part 11 (Electronic Records)"),
    ("tsa_dhs_1580_82_2022", "TSA/DHS 1580/82-2022-01"),
    ("ssa_eiesr_8.0", "SSA EIESR 8.0"),
    // --- US State Laws ---
    ("us_ca_ccpa_2025", "California CCPA/CPRA 2025"),
    ("us_ca_sb327", "California SB327 (IoT)"),
    ("us_ca_sb1386", "California SB1386"),
    ("nydfs_500_2023", "NY DFS 23 NYCRR 500 (2023 Amendment)"),
    ("us_ny_shield", "New York SHIELD Act"),
    ("us_co_cpa", "Colorado Privacy Act"),
    ("us_va_cdpa_2025", "Virginia CDPA 2025"),
    ("us_or_cpa", "Oregon Consumer Privacy Act"),
    ("us_or_646a", "Oregon 646A"),
    ("us_tn_tipa", "Tennessee TIPA"),
    ("tx_ramp_level_1", "TX-RAMP Level 1"),
    ("tx_ramp_level_2", "TX-RAMP Level 2"),
    ("us_tx_cdpa", "Texas CDPA"),
    ("us_tx_dir_2.0", "Texas DIR Control Standards 2.0"),
    ("us_tx_bc521", "Texas BC521"),
    ("us_tx_sb820", "Texas SB 820"),
    ("us_tx_sb2610", "Texas SB 2610"),
    ("us_ma_201_cmr_17", "Massachusetts 201 CMR 17.00"),
    ("us_il_bipa", "Illinois BIPA (Biometric)"),
    ("us_il_ipa", "Illinois IPA"),
    ("us_il_pipa", "Illinois PIPA"),
    ("us_nv_noge_reg_5", "Nevada NOGE Reg 5"),
    ("us_nv_sb220", "Nevada SB220"),
    ("us_ak_pipa", "Alaska PIPA"),
    ("us_vt_act_171", "Vermont Act 171 of 2018"),
    // --- EU Regulations ---
    ("dora", "Digital Operational Resilience Act (DORA)"),
    ("nis2", "NIS2 Directive"),
    ("nis2_annex", "NIS2 Directive Annex"),
    ("psd2", "PSD2 (Payment Services Directive)"),
    ("eu_eba_gl_2019_04", "EU EBA GL/2019/04"),
    // --- EMEA National ---
    ("uk_caf_4.0", "UK Cyber Assessment Framework 4.0"),
    ("uk_cyber_essentials", "UK Cyber Essentials"),
    ("uk_dpa", "UK Data Protection Act"),
    ("uk_defstan_05_138", "UK DEFSTAN 05-138"),
    ("uk_cap_1850", "UK CAP 1850"),
    ("germany", "Germany Cybersecurity"),
    ("germany_bait", "Germany BAIT (Banking IT)"),
    ("bsi_200_1", "BSI Standard 200-1"),
    ("netherlands", "Netherlands Cybersecurity"),
    ("norway", "Norway Cybersecurity"),
    ("sweden", "Sweden Cybersecurity"),
    ("austria", "Austria Cybersecurity"),
    ("belgium", "Belgium Cybersecurity"),
    ("ireland", "Ireland Cybersecurity"),
    ("italy", "Italy Cybersecurity"),
    ("greece", "Greece Cybersecurity"),
    ("hungary", "Hungary Cybersecurity"),
    ("poland", "Poland Cybersecurity"),
    ("spain_boe_a_2022_7191", "Spain BOE-A-2022-7191"),
    ("spain_1720_2007", "Spain 1720/2007"),
    ("spain_311_2022", "Spain 311/2022"),
    ("spain_ccn_stic_825", "Spain CCN-STIC 825"),
    ("switzerland", "Switzerland Cybersecurity"),
    ("turkey", "Turkey Cybersecurity"),
    ("russia", "Russia Cybersecurity"),
    ("serbia_87_2018", "Serbia 87/2018"),
    ("enisa_2.0", "ENISA 2.0"),
    // --- Middle East / Africa ---
    ("israel", "Israel Cybersecurity"),
    ("israel_cdmo_1.0", "Israel CDMO 1.0"),
    ("saudi_sama_csf_1.0", "Saudi Arabia SAMA CSF 1.0"),
    ("saudi_cscc_1_2019", "Saudi Arabia CSCC-1 2019"),
    ("saudi_ecc_1_2018", "Saudi Arabia ECC-1 2018"),
    ("saudi_otcc_1_2022", "Saudi Arabia OTCC-1 2022"),
    ("saudi_cgiot_1_2024", "Saudi Arabia IoT CGIoT-1 2024"),
    ("saudi_pdpl", "Saudi Arabia PDPL"),
    ("saudi_sacs_002", "Saudi Arabia SACS-002"),
    ("uae_niaf", "UAE NIAF"),
    ("qatar_pdppl", "Qatar PDPPL"),
    ("south_africa", "South Africa (POPIA)"),
    ("kenya_dpa_2019", "Kenya DPA 2019"),
    ("nigeria_dpr_2019", "Nigeria DPR 2019"),
    // --- APAC ---
    ("australia_essential_8", "Australian Essential Eight"),
    ("australia_ism_2024", "Australian ISM (June 2024)"),
    ("australia_privacy_act", "Australian Privacy Act"),
    ("australia_privacy_principles", "Australian Privacy Principles"),
    ("australia_iot_cop", "Australia IoT Code of Practice"),
    ("australia_cps_230", "Australia Prudential Standard CPS 230"),
    ("australia_cps_234", "Australia Prudential Standard CPS 234"),
    ("singapore", "Singapore Cybersecurity"),
    ("singapore_cyber_hygiene", "Singapore Cyber Hygiene Practice"),
    ("singapore_mas_trm_2021", "Singapore MAS TRM 2021"),
    ("japan_appi", "Japan APPI"),
    ("japan_ismap", "Japan ISMAP"),
    ("china_cybersecurity_law", "China Cybersecurity Law"),
    ("china_data_security_law", "China Data Security Law"),
    ("china_privacy_law", "China Privacy Law (PIPL)"),
    ("china_dnsip", "China DNSIP"),
    ("hong_kong", "Hong Kong Cybersecurity"),
    ("india_dpdpa_2023", "India DPDPA 2023"),
    ("india_itr", "India ITR"),
    ("india_sebi_cscrf", "India SEBI CSCRF"),
    ("south_korea", "South Korea Cybersecurity"),
    ("taiwan", "Taiwan Cybersecurity"),
    ("malaysia", "Malaysia Cybersecurity"),
    ("philippines", "Philippines Cybersecurity"),
    ("nz_hisf_2022", "New Zealand HISF 2022"),
    ("nz_hisf_suppliers_2023", "New Zealand HISF Suppliers 2023"),
    ("nz_nzism_3.6", "New Zealand NZISM 3.6"),
    ("nz_privacy_act_2020", "New Zealand Privacy Act 2020"),
    // --- Americas (non-US) ---
    ("canada_pipeda", "Canada PIPEDA"),
    ("canada_csag", "Canada CSAG"),
    ("canada_osfi_b13", "Canada OSFI B-13"),
    ("canada_itsp_10_171", "Canada ITSP-10-171"),
    ("brazil_lgpd", "Brazil LGPD"),
    ("argentina_ppl", "Argentina PPL"),
    ("argentina_reg_132_2018", "Argentina Reg 132-2018"),
    ("mexico", "Mexico Cybersecurity"),
    ("chile", "Chile Cybersecurity"),
    ("colombia", "Colombia Cybersecurity"),
    ("peru", "Peru Cybersecurity"),
    ("costa_rica", "Costa Rica Cybersecurity"),
    ("uruguay", "Uruguay Cybersecurity"),
    ("bahamas", "Bahamas Cybersecurity"),
    ("bermuda_bmaccc", "Bermuda BMACCC"),
    // --- Automotive ---
    ("tisax_isa_6", "TISAX ISA 6 (Automotive)"),
    ("un_r155", "UN R155 (Vehicle Cybersecurity)"),
    ("un_ece_wp29", "UN ECE WP.29 (Automotive)"),
    ("ul_2900_1_2017", "UL 2900-1:2017 (Software Cybersecurity)"),
    // --- Other Industry ---
    ("swift_cscf_2023", "SWIFT Customer Security Framework 2023"),
    ("shared_assessments_sig_2025", "Shared Assessments SIG 2025"),
    ("sparta", "SPARTA (Space Attack Research)"),
    ("mpa_csp_5.1", "MPA Content Security Program 5.1"),
    ("owasp_top_10_2021", "OWASP Top 10 2021"),
    ("mitre_attack_10", "MITRE ATT&CK v10"),
];

/// Display name of a framework key, if the key is part of the release.
pub fn display_name(key: &str) -> Option<&'static str> {
    FRAMEWORK_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = FRAMEWORK_NAMES.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), FRAMEWORK_NAMES.len());
        assert_eq!(FRAMEWORK_NAMES.len(), 261);
    }

    #[test]
    fn test_display_name_lookup() {
        assert_eq!(display_name("dora"), Some("Digital Operational Resilience Act (DORA)"));
        assert_eq!(display_name("not_a_real_framework"), None);
    }
}
