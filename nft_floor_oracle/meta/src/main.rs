fn main() {
    multiversx_sc_meta_lib::cli_main::<nft_floor_oracle::AbiProvider>();
}
