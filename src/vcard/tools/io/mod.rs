pub mod excel_read;
pub mod vcf_write;
